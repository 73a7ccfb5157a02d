//! Filter engine over the original item collection.
//!
//! Computes the displayed subsequence for a query together with the index map
//! from displayed position to original position. The scan is stable: results
//! keep ascending original order.

use crate::domain::Item;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a query is matched against an item's searchable text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Skim-style subsequence match. Order is still the original order.
    Fuzzy,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "fuzzy" => Ok(Self::Fuzzy),
            other => Err(format!("unknown filter mode: {other}")),
        }
    }
}

/// Result of a filter pass.
///
/// `index_map` is `None` in identity mode (empty query). When present it has
/// the same length as `displayed` and is strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub displayed: Vec<Item>,
    pub index_map: Option<Vec<usize>>,
}

/// Runs a filter pass of `query` over `original`.
///
/// # Examples
///
/// ```
/// use listadapter::adapter::filter::{apply, FilterMode};
/// use listadapter::domain::Item;
///
/// let items = vec![Item::text("Apple"), Item::text("Banana pie")];
/// let outcome = apply(&items, "AN", FilterMode::Substring);
/// assert_eq!(outcome.displayed, vec![Item::text("Banana pie")]);
/// assert_eq!(outcome.index_map, Some(vec![1]));
/// ```
#[must_use]
pub fn apply(original: &[Item], query: &str, mode: FilterMode) -> FilterOutcome {
    let query = query.to_lowercase();

    let _span = tracing::debug_span!(
        "apply_filter",
        total_items = original.len(),
        query_len = query.len(),
        mode = ?mode
    )
    .entered();

    if query.is_empty() {
        return FilterOutcome {
            displayed: original.to_vec(),
            index_map: None,
        };
    }

    let matcher = match mode {
        FilterMode::Substring => None,
        FilterMode::Fuzzy => Some(SkimMatcherV2::default()),
    };

    let (displayed, index_map): (Vec<Item>, Vec<usize>) = original
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            let searchable = item.searchable_text();
            matcher.as_ref().map_or_else(
                || searchable.contains(&query),
                |m| m.fuzzy_match(&searchable, &query).is_some(),
            )
        })
        .map(|(index, item)| (item.clone(), index))
        .unzip();

    tracing::debug!(filtered_count = displayed.len(), "filter applied");

    FilterOutcome {
        displayed,
        index_map: Some(index_map),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use pretty_assertions::assert_eq;

    fn fruit() -> Vec<Item> {
        vec![
            Item::text("Apple"),
            Item::text("Banana pie"),
            Item::Record(Record::new("Cherry").with_description("Tart fruit")),
            Item::text("grape"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let items = fruit();
        let outcome = apply(&items, "", FilterMode::Substring);
        assert_eq!(outcome.displayed, items);
        assert_eq!(outcome.index_map, None);
    }

    #[test]
    fn query_is_case_insensitive() {
        let outcome = apply(&fruit(), "APP", FilterMode::Substring);
        assert_eq!(outcome.displayed, vec![Item::text("Apple")]);
        assert_eq!(outcome.index_map, Some(vec![0]));
    }

    #[test]
    fn description_participates_in_matching() {
        let outcome = apply(&fruit(), "tart", FilterMode::Substring);
        assert_eq!(outcome.index_map, Some(vec![2]));
    }

    #[test]
    fn match_may_span_main_text_and_description() {
        let outcome = apply(&fruit(), "cherry tart", FilterMode::Substring);
        assert_eq!(outcome.index_map, Some(vec![2]));
    }

    #[test]
    fn results_keep_original_order() {
        let outcome = apply(&fruit(), "a", FilterMode::Substring);
        assert_eq!(outcome.index_map, Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn no_match_yields_empty_active_filter() {
        let outcome = apply(&fruit(), "zzz", FilterMode::Substring);
        assert!(outcome.displayed.is_empty());
        assert_eq!(outcome.index_map, Some(vec![]));
    }

    #[test]
    fn fuzzy_mode_matches_subsequences() {
        let substring = apply(&fruit(), "bpe", FilterMode::Substring);
        assert!(substring.displayed.is_empty());

        let fuzzy = apply(&fruit(), "bpe", FilterMode::Fuzzy);
        assert_eq!(fuzzy.index_map, Some(vec![1]));
    }

    #[test]
    fn filter_mode_parses_names() {
        assert_eq!("Fuzzy".parse::<FilterMode>(), Ok(FilterMode::Fuzzy));
        assert_eq!("substring".parse::<FilterMode>(), Ok(FilterMode::Substring));
        assert!("regex".parse::<FilterMode>().is_err());
    }
}
