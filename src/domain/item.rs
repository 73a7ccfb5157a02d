//! List item model.
//!
//! An item is either a plain display string or a record with a main text, an
//! optional description and an optional image reference. Records arrive from
//! the host as key-value maps; anything that is not a string or a record with
//! a main text is kept as its own string representation so that every row
//! still has something to show.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record key holding the main (first line) text.
pub const KEY_MAIN_TEXT: &str = "MainText";

/// Record key holding the optional description (detail) text.
pub const KEY_DESCRIPTION: &str = "Description";

/// Record key holding the optional image reference.
pub const KEY_IMAGE: &str = "Image";

/// A key-value list item with a required main text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub main_text: String,
    pub description: Option<String>,
    /// Opaque image reference, resolved by the rendering host.
    pub image: Option<String>,
}

impl Record {
    #[must_use]
    pub fn new(main_text: impl Into<String>) -> Self {
        Self {
            main_text: main_text.into(),
            description: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds a record from a JSON object, if it carries a main text.
    ///
    /// Non-string field values are converted to their string form and `null`
    /// counts as absent.
    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let main_text = object.get(KEY_MAIN_TEXT).and_then(value_to_text)?;
        Some(Self {
            main_text,
            description: object.get(KEY_DESCRIPTION).and_then(value_to_text),
            image: object.get(KEY_IMAGE).and_then(value_to_text),
        })
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert(KEY_MAIN_TEXT.to_string(), Value::String(self.main_text.clone()));
        if let Some(description) = &self.description {
            object.insert(KEY_DESCRIPTION.to_string(), Value::String(description.clone()));
        }
        if let Some(image) = &self.image {
            object.insert(KEY_IMAGE.to_string(), Value::String(image.clone()));
        }
        object
    }
}

/// A single list item as supplied by the caller.
///
/// Deserializes from any JSON value: strings become [`Item::Text`], objects
/// with a [`KEY_MAIN_TEXT`] entry become [`Item::Record`], and everything else
/// becomes [`Item::Text`] holding the value's JSON representation.
///
/// # Examples
///
/// ```
/// use listadapter::domain::Item;
///
/// let items: Vec<Item> = serde_json::from_str(
///     r#"["Apple", {"MainText": "Banana", "Description": "yellow"}, 42]"#,
/// ).unwrap();
/// assert_eq!(items[0].main_text(), "Apple");
/// assert_eq!(items[1].description(), Some("yellow"));
/// assert_eq!(items[2].main_text(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Item {
    /// A plain display string.
    Text(String),
    /// A record with main text and optional description and image.
    Record(Record),
}

impl Item {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text for the first row slot.
    #[must_use]
    pub fn main_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Record(record) => &record.main_text,
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Record(record) => record.description.as_deref(),
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Record(record) => record.image.as_deref(),
        }
    }

    /// Lowercased text the filter matches against.
    ///
    /// For records this is the main text followed by a space and the
    /// description when one is present.
    ///
    /// ```
    /// use listadapter::domain::{Item, Record};
    ///
    /// let item = Item::Record(Record::new("Pear").with_description("Green"));
    /// assert_eq!(item.searchable_text(), "pear green");
    /// assert_eq!(Item::text("Fig").searchable_text(), "fig");
    /// ```
    #[must_use]
    pub fn searchable_text(&self) -> String {
        match self {
            Self::Text(text) => text.to_lowercase(),
            Self::Record(record) => match &record.description {
                Some(description) => format!(
                    "{} {}",
                    record.main_text.to_lowercase(),
                    description.to_lowercase()
                ),
                None => record.main_text.to_lowercase(),
            },
        }
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Record> for Item {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(ref object) => Record::from_object(object).map_or_else(
                || {
                    tracing::debug!("record without main text, using its string form");
                    Self::Text(value.to_string())
                },
                Self::Record,
            ),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        match item {
            Item::Text(text) => Self::String(text),
            Item::Record(record) => Self::Object(record.to_object()),
        }
    }
}

/// String form of a record field, `None` for `null`.
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_fields_are_read_from_known_keys() {
        let item = Item::from(json!({
            "MainText": "Kiwi",
            "Description": "fuzzy",
            "Image": "kiwi.png"
        }));
        assert_eq!(
            item,
            Item::Record(Record::new("Kiwi").with_description("fuzzy").with_image("kiwi.png"))
        );
    }

    #[test]
    fn object_without_main_text_falls_back_to_string_form() {
        let item = Item::from(json!({ "Description": "orphan" }));
        assert_eq!(item, Item::text(r#"{"Description":"orphan"}"#));
    }

    #[test]
    fn non_string_values_use_their_string_form() {
        assert_eq!(Item::from(json!(3.5)).main_text(), "3.5");
        assert_eq!(Item::from(json!(true)).main_text(), "true");
        assert_eq!(Item::from(json!({ "MainText": 7 })).main_text(), "7");
    }

    #[test]
    fn null_description_is_absent() {
        let item = Item::from(json!({ "MainText": "A", "Description": null }));
        assert_eq!(item.description(), None);
        assert_eq!(item.searchable_text(), "a");
    }

    #[test]
    fn searchable_text_lowercases_both_fields() {
        let item = Item::Record(Record::new("Apple").with_description("Red FRUIT"));
        assert_eq!(item.searchable_text(), "apple red fruit");
    }

    #[test]
    fn serializes_back_to_host_shape() {
        let item = Item::Record(Record::new("A").with_image("a.png"));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ "MainText": "A", "Image": "a.png" }));
    }
}
