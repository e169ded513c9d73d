//! Fixed display taxonomy
//!
//! Groups are the top-level buckets shown in the navigation. Only the
//! Österreich group is refined further into sub-categories.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Group reserved for items published on `.at` domains
pub const AUSTRIA_GROUP: &str = "Österreich";

/// Group and sub used when nothing more specific applies
pub const FALLBACK_GROUP: &str = "Allgemein";

pub const SPORT_GROUP: &str = "Sport";

/// Groups with a fixed display position; everything else follows alphabetically
pub const PRIORITY_GROUPS: [&str; 8] = [
    AUSTRIA_GROUP,
    "Chronik",
    "Politik",
    SPORT_GROUP,
    "Wirtschaft",
    "Wissenschaft",
    "Gesellschaft",
    "Wetter",
];

/// Allowed Österreich sub-categories (order matters: first match wins, and
/// list position is the display order)
pub const AUSTRIA_SUBS: [&str; 15] = [
    "Sport",
    "Politik",
    "Burgenland",
    "Kärnten",
    "Niederösterreich",
    "Oberösterreich",
    "Salzburg",
    "Steiermark",
    "Tirol",
    "Vorarlberg",
    "Wien",
    "Wirtschaft",
    "Chronik",
    "Wissenschaft",
    "Gesellschaft",
];

/// Taxonomy assignment of a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub group: String,
    /// Only ever set when `group` is Österreich
    pub sub: Option<String>,
    /// Raw category the entry was derived from
    pub original: String,
}

impl TaxonomyEntry {
    pub fn new(group: impl Into<String>, sub: Option<&str>, original: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            sub: sub.map(str::to_string),
            original: original.into(),
        }
    }

    pub fn is_sport(&self) -> bool {
        self.group == SPORT_GROUP
            || (self.group == AUSTRIA_GROUP && self.sub.as_deref() == Some(SPORT_GROUP))
    }
}

/// Display order of groups: fixed priority first, then alphabetical
pub fn compare_groups(a: &str, b: &str) -> Ordering {
    rank_then_alpha(&PRIORITY_GROUPS, a, b)
}

/// Display order of Österreich subs: list position first, then alphabetical
pub fn compare_subs(a: &str, b: &str) -> Ordering {
    rank_then_alpha(&AUSTRIA_SUBS, a, b)
}

fn rank_then_alpha(ranked: &[&str], a: &str, b: &str) -> Ordering {
    let rank_a = ranked.iter().position(|r| *r == a);
    let rank_b = ranked.iter().position(|r| *r == b);

    match (rank_a, rank_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_order() {
        let mut groups = vec!["Zeitgeschehen", "Sport", "Allgemein", "Österreich", "Wetter"];
        groups.sort_by(|a, b| compare_groups(a, b));
        assert_eq!(groups, vec!["Österreich", "Sport", "Wetter", "Allgemein", "Zeitgeschehen"]);
    }

    #[test]
    fn test_sub_order() {
        let mut subs = vec!["Wien", "Allgemein", "Sport", "Kärnten"];
        subs.sort_by(|a, b| compare_subs(a, b));
        assert_eq!(subs, vec!["Sport", "Kärnten", "Wien", "Allgemein"]);
    }

    #[test]
    fn test_is_sport() {
        assert!(TaxonomyEntry::new("Sport", None, "Sport").is_sport());
        assert!(TaxonomyEntry::new("Österreich", Some("Sport"), "Sport").is_sport());
        assert!(!TaxonomyEntry::new("Österreich", Some("Wien"), "Wien").is_sport());
        assert!(!TaxonomyEntry::new("Politik", None, "Inland").is_sport());
    }
}
