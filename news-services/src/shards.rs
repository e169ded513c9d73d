//! Data shards
//!
//! A shard is one JSON file holding an array of news records. Shards are
//! named after the civil day they belong to (`2026-02-09.json`,
//! `2026-02-09-07-09.json`, ...), except permanent shards (`permanent*.json`)
//! which contribute to every day.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use news_core::{NewsError, NewsItem, NewsResult};

/// Name prefix of shards included for every date
pub const PERMANENT_PREFIX: &str = "permanent";

const SHARD_EXTENSION: &str = "json";

const BOM: char = '\u{feff}';

/// Listing and reading of shards
#[async_trait]
pub trait ShardSource: Send + Sync {
    /// Names of all shards currently available
    async fn list(&self) -> io::Result<Vec<String>>;

    /// Raw text of one shard
    async fn read(&self, name: &str) -> io::Result<String>;

    /// Human-readable location for logs and health checks
    fn location(&self) -> String;
}

/// Shards stored as files in one directory
#[derive(Debug, Clone)]
pub struct FsShardSource {
    dir: PathBuf,
}

impl FsShardSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ShardSource for FsShardSource {
    async fn list(&self) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let is_dir = entry.file_type().await.map(|t| t.is_dir());
            if let Some(name) = listed_shard_name(entry.file_name(), is_dir) {
                names.push(name);
            }
        }

        Ok(names)
    }

    async fn read(&self, name: &str) -> io::Result<String> {
        if name.contains(['/', '\\']) || name == ".." {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("shard name must not contain a path: {}", name),
            ));
        }
        tokio::fs::read_to_string(self.dir.join(name)).await
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Name of a directory entry that may hold a shard
///
/// An entry whose type cannot be determined is skipped so that one vanished
/// or unreadable entry does not fail the whole listing.
fn listed_shard_name(name: OsString, is_dir: io::Result<bool>) -> Option<String> {
    match is_dir {
        Ok(true) => None,
        // Non UTF-8 names can never match a date prefix
        Ok(false) => name.into_string().ok(),
        Err(e) => {
            warn!("Skipping directory entry {:?}: {}", name, e);
            None
        }
    }
}

/// In-memory shards, used for tests and for serving fixed data sets
#[derive(Debug, Clone, Default)]
pub struct MemoryShardSource {
    /// `None` marks a shard that is listed but cannot be read
    shards: BTreeMap<String, Option<String>>,
    unavailable: bool,
}

impl MemoryShardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose listing always fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_shard(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.shards.insert(name.into(), Some(content.into()));
        self
    }

    pub fn with_unreadable_shard(mut self, name: impl Into<String>) -> Self {
        self.shards.insert(name.into(), None);
        self
    }
}

#[async_trait]
impl ShardSource for MemoryShardSource {
    async fn list(&self) -> io::Result<Vec<String>> {
        if self.unavailable {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "in-memory shard source is unavailable",
            ));
        }
        Ok(self.shards.keys().cloned().collect())
    }

    async fn read(&self, name: &str) -> io::Result<String> {
        match self.shards.get(name) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("shard {} is unreadable", name),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no shard named {}", name),
            )),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

fn is_shard_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SHARD_EXTENSION))
}

/// Select the shards for `date` (`YYYY-MM-DD`) and put them in merge order
///
/// Merge order is: permanent shards alphabetically, then the primary
/// `<date>.json`, then every other shard of the day alphabetically.
pub fn order_shards<I>(names: I, date: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let primary = format!("{}.{}", date, SHARD_EXTENSION);

    let mut permanent = Vec::new();
    let mut primaries = Vec::new();
    let mut others = Vec::new();

    for name in names.into_iter().filter(|n| is_shard_file(n)) {
        if name.starts_with(PERMANENT_PREFIX) {
            permanent.push(name);
        } else if name == primary {
            primaries.push(name);
        } else if name.starts_with(date) {
            others.push(name);
        }
    }

    permanent.sort();
    others.sort();

    permanent
        .into_iter()
        .chain(primaries)
        .chain(others)
        .collect()
}

/// Parse the text of one shard into its records
///
/// A leading byte order mark is ignored. Anything other than a JSON array of
/// records is a [`NewsError::MalformedShard`].
pub fn parse_shard(name: &str, content: &str) -> NewsResult<Vec<NewsItem>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let value: Value = serde_json::from_str(content)
        .map_err(|e| NewsError::malformed_shard(name, e.to_string()))?;

    if !value.is_array() {
        return Err(NewsError::malformed_shard(
            name,
            "top-level value is not an array",
        ));
    }

    serde_json::from_value(value).map_err(|e| NewsError::malformed_shard(name, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_order_permanent_primary_then_rest() {
        let ordered = order_shards(
            names(&[
                "permanent-b.json",
                "2026-02-09-extra.json",
                "permanent-a.json",
                "2026-02-09.json",
            ]),
            "2026-02-09",
        );
        assert_eq!(
            ordered,
            names(&[
                "permanent-a.json",
                "permanent-b.json",
                "2026-02-09.json",
                "2026-02-09-extra.json",
            ])
        );
    }

    #[test]
    fn test_order_skips_other_days_and_non_json() {
        let ordered = order_shards(
            names(&[
                "2026-02-08.json",
                "2026-02-09-07-09.json",
                "2026-02-09.json.bak",
                "2026-02-09-notes.txt",
                "README.md",
                "2026-02-09-00-30.JSON",
                "permanent.json",
            ]),
            "2026-02-09",
        );
        assert_eq!(
            ordered,
            names(&["permanent.json", "2026-02-09-00-30.JSON", "2026-02-09-07-09.json"])
        );
    }

    #[test]
    fn test_order_empty_when_nothing_matches() {
        assert!(order_shards(names(&["2026-02-08.json"]), "2026-02-09").is_empty());
    }

    #[test]
    fn test_parse_strips_bom() {
        let content = "\u{feff}[{\"headline\": \"Mit BOM\"}]";
        let items = parse_shard("2026-02-09.json", content).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].headline, "Mit BOM");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_shard("2026-02-09.json", r#"{"headline": "x"}"#).unwrap_err();
        assert!(matches!(err, NewsError::MalformedShard { .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_shard("2026-02-09.json", "[{\"headline\": ").unwrap_err();
        assert!(matches!(err, NewsError::MalformedShard { ref shard, .. } if shard == "2026-02-09.json"));
    }

    #[test]
    fn test_entry_with_unknown_type_is_skipped() {
        let vanished = io::Error::new(io::ErrorKind::NotFound, "entry vanished");
        assert_eq!(
            listed_shard_name(OsString::from("2026-02-09.json"), Err(vanished)),
            None
        );
        assert_eq!(
            listed_shard_name(OsString::from("2026-02-09.json"), Ok(false)),
            Some("2026-02-09.json".to_string())
        );
        assert_eq!(listed_shard_name(OsString::from("2026-02-09"), Ok(true)), None);
    }

    #[tokio::test]
    async fn test_fs_source_lists_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2026-02-09.json"), "[]").unwrap();
        std::fs::create_dir(dir.path().join("2026-02-09-archive.json")).unwrap();

        let listed = FsShardSource::new(dir.path()).list().await.unwrap();
        assert_eq!(listed, names(&["2026-02-09.json"]));
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemoryShardSource::new()
            .with_shard("2026-02-09.json", "[]")
            .with_unreadable_shard("2026-02-09-locked.json");

        let mut listed = source.list().await.unwrap();
        listed.sort();
        assert_eq!(listed, names(&["2026-02-09-locked.json", "2026-02-09.json"]));
        assert_eq!(source.read("2026-02-09.json").await.unwrap(), "[]");
        assert!(source.read("2026-02-09-locked.json").await.is_err());
        assert!(MemoryShardSource::unavailable().list().await.is_err());
    }
}
