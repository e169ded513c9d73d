//! Business logic services for the daily news viewer
//!
//! This crate resolves the JSON shards for a requested day, merges them in a
//! fixed precedence order, and turns the raw records into a classified,
//! grouped digest.

pub mod calendar;
pub mod classifier;
pub mod digest;
pub mod football;
pub mod resolver;
pub mod shards;

pub use calendar::{Clock, DateRequest, FixedClock, NewsCalendar, SystemClock, DEFAULT_TIMEZONE};
pub use classifier::{classify, classify_item};
pub use digest::{build_digest, DigestQuery};
pub use football::{is_football, prioritize};
pub use resolver::{NewsResolver, ResolvedNews};
pub use shards::{order_shards, FsShardSource, MemoryShardSource, ShardSource};
