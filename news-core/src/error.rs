//! Error types for the news viewer

use thiserror::Error;

/// Viewer-wide error type
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("No news shards found for {date}")]
    NotFound { date: String },

    #[error("Malformed shard {shard}: {reason}")]
    MalformedShard { shard: String, reason: String },

    #[error("Data directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl NewsError {
    pub fn not_found(date: impl Into<String>) -> Self {
        NewsError::NotFound { date: date.into() }
    }

    pub fn malformed_shard(shard: impl Into<String>, reason: impl Into<String>) -> Self {
        NewsError::MalformedShard {
            shard: shard.into(),
            reason: reason.into(),
        }
    }

    pub fn directory_unavailable(msg: impl Into<String>) -> Self {
        NewsError::DirectoryUnavailable(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        NewsError::InvalidDate(msg.into())
    }

    /// Short localized message shown to readers
    ///
    /// Distinguishes "nothing for this date" from "temporarily unavailable";
    /// internal details never leak into this text.
    pub fn user_message(&self) -> String {
        match self {
            NewsError::NotFound { .. } => "Keine Nachrichten für dieses Datum verfügbar".to_string(),
            NewsError::InvalidDate(raw) => format!("Ungültiges Datum: {}", raw),
            NewsError::MalformedShard { .. } | NewsError::DirectoryUnavailable(_) => {
                "Nachrichten sind derzeit nicht verfügbar. Bitte versuchen Sie es später erneut."
                    .to_string()
            }
        }
    }
}

/// Result type alias for news operations
pub type NewsResult<T> = Result<T, NewsError>;
