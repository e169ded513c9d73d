//! Core types for the daily news viewer
//!
//! This crate defines the shared data structures used across the viewer,
//! including raw news records, taxonomy entries and the error type.

pub mod error;
pub mod news;
pub mod taxonomy;

pub use error::{NewsError, NewsResult};
pub use news::{ClassifiedNewsItem, NewsDigest, NewsItem, NewsSection, NavigationGroup};
pub use taxonomy::{
    compare_groups, compare_subs, TaxonomyEntry, AUSTRIA_GROUP, AUSTRIA_SUBS, FALLBACK_GROUP,
    PRIORITY_GROUPS, SPORT_GROUP,
};
