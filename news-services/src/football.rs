//! Football prioritization for Sport items
//!
//! Readers care most about football, so within a display group football
//! stories are moved ahead of other Sport stories. The detection runs once
//! per item; sorting only reads the precomputed flag.

use news_core::{ClassifiedNewsItem, NewsItem};

const FOOTBALL_EMOJI: &str = "⚽";

/// Clubs, competitions and general football vocabulary (lowercase)
const FOOTBALL_KEYWORDS: &[&str] = &[
    "fußball",
    "fussball",
    "soccer",
    "bundesliga",
    "oefb",
    "öfb",
    "fifa",
    "uefa",
    "kicker",
    "ball",
    "tor",
    "match",
    "spiel",
    "lig",
    "champions league",
    "europa league",
    "conference league",
    "nationalteam",
    "teamchef",
    "rapid",
    "sturm",
    "austria wien",
    "lask",
    "altach",
    "hartberg",
    "wolfsberg",
    "wac",
    "klagenfurt",
    "blau-weiß",
    "gak",
    "red bull",
    "salzburg",
    "liefering",
    "svr",
    "ried",
    "admira",
    "vienna",
    "sportclub",
    "tabellenführer",
    "meisterschaft",
    "cup",
    "abstieg",
    "aufstieg",
    "relegation",
];

/// Whether an item is about football
///
/// The scraper's football emoji is trusted without looking at the text.
pub fn is_football(item: &NewsItem) -> bool {
    if item
        .emoji
        .as_deref()
        .is_some_and(|emoji| emoji.contains(FOOTBALL_EMOJI))
    {
        return true;
    }

    let text = item.search_text();
    FOOTBALL_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// Move football stories ahead of other Sport stories within one group
///
/// Only adjacent Sport items trade places: each unbroken run of Sport items
/// is stably partitioned, football first. Any non-Sport item ends a run, and
/// non-Sport items keep their positions.
pub fn prioritize(items: &mut [ClassifiedNewsItem]) {
    for run in items.chunk_by_mut(|a, b| a.is_sport() && b.is_sport()) {
        if run.len() > 1 {
            // Stable sort keeps the original order on each side
            run.sort_by_key(|item| !item.football);
        }
    }
}
