//! Daily news resolver
//!
//! Finds every shard belonging to a requested day, reads them concurrently
//! and merges them into one list in shard precedence order.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use news_core::{NewsError, NewsItem, NewsResult};

use crate::calendar::{shard_date, Clock, DateRequest, NewsCalendar};
use crate::shards::{order_shards, parse_shard, ShardSource};

/// Result of resolving one day
#[derive(Debug, Clone)]
pub struct ResolvedNews {
    /// Civil date the request resolved to
    pub date: NaiveDate,
    /// Shards that contributed, in merge order
    pub shards: Vec<String>,
    /// Raw records in merge order (shard order, then order within the shard)
    pub items: Vec<NewsItem>,
}

/// Resolves date requests against a shard source
#[derive(Clone)]
pub struct NewsResolver {
    source: Arc<dyn ShardSource>,
    clock: Arc<dyn Clock>,
    calendar: NewsCalendar,
}

impl NewsResolver {
    pub fn new(source: Arc<dyn ShardSource>, clock: Arc<dyn Clock>, calendar: NewsCalendar) -> Self {
        info!(
            "Initializing NewsResolver for {} in {}",
            source.location(),
            calendar.timezone()
        );
        Self {
            source,
            clock,
            calendar,
        }
    }

    pub fn source_location(&self) -> String {
        self.source.location()
    }

    /// Civil date a request refers to right now
    pub fn date_for(&self, request: DateRequest) -> NaiveDate {
        self.calendar.resolve(request, self.clock.now())
    }

    /// Resolve and merge all shards for the requested day
    ///
    /// Fails with [`NewsError::NotFound`] when no shard matches and with
    /// [`NewsError::DirectoryUnavailable`] when shards cannot be listed.
    /// Individual broken shards only contribute nothing.
    #[instrument(skip(self))]
    pub async fn resolve(&self, request: DateRequest) -> NewsResult<ResolvedNews> {
        let date = self.date_for(request);
        let date_str = shard_date(date);
        info!("Requesting news for date: {}", date_str);

        let listed = self.source.list().await.map_err(|e| {
            error!("Failed to list shards in {}: {}", self.source.location(), e);
            NewsError::directory_unavailable(format!("{}: {}", self.source.location(), e))
        })?;

        let shards = order_shards(listed, &date_str);
        if shards.is_empty() {
            warn!("No shards found for {} in {}", date_str, self.source.location());
            return Err(NewsError::not_found(date_str));
        }
        debug!("Merging shards for {}: {:?}", date_str, shards);

        let loaded = join_all(shards.iter().map(|name| self.load_shard(name))).await;
        let items: Vec<NewsItem> = loaded.into_iter().flatten().collect();

        info!(
            "Resolved {} items from {} shard(s) for {}",
            items.len(),
            shards.len(),
            date_str
        );

        Ok(ResolvedNews {
            date,
            shards,
            items,
        })
    }

    /// Read and parse one shard; any failure yields an empty contribution
    async fn load_shard(&self, name: &str) -> Vec<NewsItem> {
        let content = match self.source.read(name).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read shard {} (skipping): {}", name, e);
                return Vec::new();
            }
        };

        match parse_shard(name, &content) {
            Ok(items) => {
                debug!("Loaded {} items from {}", items.len(), name);
                items
            }
            Err(e) => {
                warn!("{} (skipping)", e);
                Vec::new()
            }
        }
    }
}
