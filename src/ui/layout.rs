//! Row layout variants.
//!
//! Each layout is a variant carrying only the slots it has, so an image
//! layout always has an image slot and a single-text layout never has a
//! detail slot. Hosts select a layout by numeric code or by name.
//!
//! | code | name                | slots                    |
//! |------|---------------------|--------------------------|
//! | 0    | `single-text`       | main                     |
//! | 1    | `two-text`          | main, wrapped detail     |
//! | 2    | `two-text-linear`   | main, single-line detail |
//! | 3    | `image-single-text` | image, main              |
//! | 4    | `image-two-text`    | image, main, detail      |

use super::viewmodel::{ImageSlot, RowContent, TextStyle};
use crate::domain::{Item, ListAdapterError, Result};
use crate::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout selector as written in configuration: a host code or a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutSpec {
    Code(i64),
    Name(String),
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::Code(0)
    }
}

impl fmt::Display for LayoutSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for LayoutSpec {
    fn from(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Name(s.trim().to_string()), Self::Code)
    }
}

/// Layout discriminant without slot data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    SingleText,
    TwoText,
    TwoTextLinear,
    ImageSingleText,
    ImageTwoText,
}

impl LayoutKind {
    /// Resolves a configured layout selector.
    ///
    /// # Errors
    ///
    /// Returns [`ListAdapterError::Layout`] for unknown codes and names.
    pub fn from_spec(spec: &LayoutSpec) -> Result<Self> {
        let kind = match spec {
            LayoutSpec::Code(0) => Self::SingleText,
            LayoutSpec::Code(1) => Self::TwoText,
            LayoutSpec::Code(2) => Self::TwoTextLinear,
            LayoutSpec::Code(3) => Self::ImageSingleText,
            LayoutSpec::Code(4) => Self::ImageTwoText,
            LayoutSpec::Name(name) => match name.to_lowercase().replace('_', "-").as_str() {
                "single-text" => Self::SingleText,
                "two-text" => Self::TwoText,
                "two-text-linear" => Self::TwoTextLinear,
                "image-single-text" => Self::ImageSingleText,
                "image-two-text" => Self::ImageTwoText,
                _ => return Err(ListAdapterError::Layout(spec.to_string())),
            },
            LayoutSpec::Code(_) => return Err(ListAdapterError::Layout(spec.to_string())),
        };
        Ok(kind)
    }

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::SingleText => 0,
            Self::TwoText => 1,
            Self::TwoTextLinear => 2,
            Self::ImageSingleText => 3,
            Self::ImageTwoText => 4,
        }
    }
}

/// A row layout with the styles of its slots.
#[derive(Debug, Clone, PartialEq)]
pub enum RowLayout {
    SingleText {
        main: TextStyle,
    },
    /// Main text above a wrapping detail text.
    TwoText {
        main: TextStyle,
        detail: TextStyle,
    },
    /// Main text beside a single-line detail text, ellipsis disabled.
    TwoTextLinear {
        main: TextStyle,
        detail: TextStyle,
    },
    ImageSingleText {
        image: ImageSlot,
        main: TextStyle,
    },
    ImageTwoText {
        image: ImageSlot,
        main: TextStyle,
        detail: TextStyle,
    },
}

impl RowLayout {
    /// Builds the layout selected in `config` with the configured styles.
    ///
    /// # Errors
    ///
    /// Returns [`ListAdapterError::Layout`] if the configured layout is not
    /// recognized.
    pub fn from_config(config: &Config) -> Result<Self> {
        let main = TextStyle {
            color: config.main_text_color,
            size: config.main_text_size,
            font: config.main_text_font.clone(),
        };
        let detail = TextStyle {
            color: config.detail_text_color,
            size: config.detail_text_size,
            font: config.detail_text_font.clone(),
        };
        let image = ImageSlot {
            width: config.image_width,
            height: config.image_height,
        };

        Ok(match LayoutKind::from_spec(&config.layout)? {
            LayoutKind::SingleText => Self::SingleText { main },
            LayoutKind::TwoText => Self::TwoText { main, detail },
            LayoutKind::TwoTextLinear => Self::TwoTextLinear { main, detail },
            LayoutKind::ImageSingleText => Self::ImageSingleText { image, main },
            LayoutKind::ImageTwoText => Self::ImageTwoText { image, main, detail },
        })
    }

    #[must_use]
    pub const fn kind(&self) -> LayoutKind {
        match self {
            Self::SingleText { .. } => LayoutKind::SingleText,
            Self::TwoText { .. } => LayoutKind::TwoText,
            Self::TwoTextLinear { .. } => LayoutKind::TwoTextLinear,
            Self::ImageSingleText { .. } => LayoutKind::ImageSingleText,
            Self::ImageTwoText { .. } => LayoutKind::ImageTwoText,
        }
    }

    #[must_use]
    pub const fn main_style(&self) -> &TextStyle {
        match self {
            Self::SingleText { main }
            | Self::TwoText { main, .. }
            | Self::TwoTextLinear { main, .. }
            | Self::ImageSingleText { main, .. }
            | Self::ImageTwoText { main, .. } => main,
        }
    }

    #[must_use]
    pub const fn detail_style(&self) -> Option<&TextStyle> {
        match self {
            Self::TwoText { detail, .. }
            | Self::TwoTextLinear { detail, .. }
            | Self::ImageTwoText { detail, .. } => Some(detail),
            Self::SingleText { .. } | Self::ImageSingleText { .. } => None,
        }
    }

    #[must_use]
    pub const fn image_slot(&self) -> Option<&ImageSlot> {
        match self {
            Self::ImageSingleText { image, .. } | Self::ImageTwoText { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Line limit for the detail slot; `None` means it may wrap.
    #[must_use]
    pub const fn detail_max_lines(&self) -> Option<u32> {
        match self {
            Self::TwoTextLinear { .. } => Some(1),
            _ => None,
        }
    }

    /// Fills this layout's slots from `item`.
    ///
    /// Missing descriptions bind as empty text; missing images bind as `None`.
    #[must_use]
    pub fn content_for(&self, item: &Item) -> RowContent {
        let main = item.main_text().to_string();
        let detail = || item.description().unwrap_or_default().to_string();
        let image = || item.image().map(str::to_string);

        match self {
            Self::SingleText { .. } => RowContent::SingleText { main },
            Self::TwoText { .. } => RowContent::TwoText { main, detail: detail() },
            Self::TwoTextLinear { .. } => RowContent::TwoTextLinear { main, detail: detail() },
            Self::ImageSingleText { .. } => RowContent::ImageSingleText { image: image(), main },
            Self::ImageTwoText { .. } => RowContent::ImageTwoText {
                image: image(),
                main,
                detail: detail(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn config_with(layout: LayoutSpec) -> Config {
        Config {
            layout,
            ..Config::default()
        }
    }

    #[test]
    fn codes_and_names_resolve_to_the_same_kind() {
        for kind in [
            LayoutKind::SingleText,
            LayoutKind::TwoText,
            LayoutKind::TwoTextLinear,
            LayoutKind::ImageSingleText,
            LayoutKind::ImageTwoText,
        ] {
            assert_eq!(LayoutKind::from_spec(&LayoutSpec::Code(kind.code())).unwrap(), kind);
        }
        assert_eq!(
            LayoutKind::from_spec(&LayoutSpec::Name("Image_Two_Text".into())).unwrap(),
            LayoutKind::ImageTwoText
        );
    }

    #[test]
    fn unknown_layout_is_an_error() {
        let err = LayoutKind::from_spec(&LayoutSpec::Code(9)).unwrap_err();
        assert!(matches!(err, ListAdapterError::Layout(ref s) if s == "9"));
        assert!(RowLayout::from_config(&config_with("grid".into())).is_err());
    }

    #[test]
    fn layout_spec_from_str_prefers_codes() {
        assert_eq!(LayoutSpec::from(" 2 "), LayoutSpec::Code(2));
        assert_eq!(LayoutSpec::from("two-text"), LayoutSpec::Name("two-text".into()));
    }

    #[test]
    fn image_layouts_carry_configured_slot() {
        let mut config = config_with(LayoutSpec::Code(3));
        config.image_width = 48;
        config.image_height = 32;
        let layout = RowLayout::from_config(&config).unwrap();
        assert_eq!(layout.image_slot(), Some(&ImageSlot { width: 48, height: 32 }));
        assert!(layout.detail_style().is_none());
    }

    #[test]
    fn linear_layout_limits_detail_to_one_line() {
        let layout = RowLayout::from_config(&config_with(LayoutSpec::Code(2))).unwrap();
        assert_eq!(layout.detail_max_lines(), Some(1));
        let wrapped = RowLayout::from_config(&config_with(LayoutSpec::Code(1))).unwrap();
        assert_eq!(wrapped.detail_max_lines(), None);
    }

    #[test]
    fn content_fills_only_present_slots() {
        let layout = RowLayout::from_config(&config_with(LayoutSpec::Code(4))).unwrap();
        let content = layout.content_for(&Item::text("plain"));
        assert_eq!(
            content,
            RowContent::ImageTwoText {
                image: None,
                main: "plain".into(),
                detail: String::new(),
            }
        );

        let record = Item::Record(Record::new("A").with_description("d").with_image("a.png"));
        let content = layout.content_for(&record);
        assert_eq!(content.image(), Some("a.png"));
        assert_eq!(content.detail_text(), "d");
    }
}
