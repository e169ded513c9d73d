//! News data structures for the daily snapshot viewer

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::taxonomy::TaxonomyEntry;

/// A single news record as produced by the upstream scrapers
///
/// Every field is optional on the wire; scrapers occasionally omit fields or
/// write `null` and a record must still load. Text fields read as empty when
/// absent or null. Unknown fields are kept and served back with the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article headline
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headline: String,
    /// Short teaser text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub teaser: String,
    /// Free-form category as reported by the source (e.g. "Inland", "Sport")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Article URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_url: String,
    /// Human-readable source name (e.g. "ORF")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_name: String,
    /// Display emoji chosen by the scraper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Content warning shown next to the source link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Items flagged by editors; hidden from readers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<bool>,
    /// Any additional fields written by the scrapers
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads an explicit `null` the same way as a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewsItem {
    /// Whether editors flagged this item to be hidden
    pub fn is_ignored(&self) -> bool {
        self.ignore.unwrap_or(false)
    }

    /// Lowercased "headline teaser" text used for keyword scans
    pub fn search_text(&self) -> String {
        format!("{} {}", self.headline, self.teaser).to_lowercase()
    }
}

/// A news item with its taxonomy attached
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedNewsItem {
    #[serde(flatten)]
    pub item: NewsItem,
    #[serde(flatten)]
    pub taxonomy: TaxonomyEntry,
    /// Football content, computed once at classification time
    pub football: bool,
}

impl ClassifiedNewsItem {
    /// Sport content is either the top-level Sport group or Österreich > Sport
    pub fn is_sport(&self) -> bool {
        self.taxonomy.is_sport()
    }
}

/// Navigation entry: one group with its sub-categories in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    pub group: String,
    #[serde(default)]
    pub subs: Vec<String>,
}

/// Items of one display group, already prioritized
#[derive(Debug, Clone, Serialize)]
pub struct NewsSection {
    pub group: String,
    pub items: Vec<ClassifiedNewsItem>,
}

/// Fully prepared view of one day's news
#[derive(Debug, Clone, Serialize)]
pub struct NewsDigest {
    /// Canonical civil date the shards were resolved for
    pub date: NaiveDate,
    /// German long form of `date` (e.g. "Montag, 9. Februar 2026")
    pub display_date: String,
    /// Number of items after filtering
    pub total: usize,
    /// All groups present for the day, independent of the active filter
    pub navigation: Vec<NavigationGroup>,
    pub sections: Vec<NewsSection>,
}
