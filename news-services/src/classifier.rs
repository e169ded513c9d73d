//! Category classifier
//!
//! Maps the free-form category reported by a source onto the fixed display
//! taxonomy. Matching is case-insensitive substring matching against ordered
//! rule tables; the first matching rule wins.

use news_core::{NewsItem, TaxonomyEntry, AUSTRIA_GROUP, AUSTRIA_SUBS, FALLBACK_GROUP};

/// A keyword rule mapping a category string onto a group
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub group: &'static str,
    /// Any of these substrings selects the group
    pub keywords: &'static [&'static str],
    /// `(keyword, veto)` pairs: the keyword only counts when the veto is absent
    pub guarded: &'static [(&'static str, &'static str)],
}

impl CategoryRule {
    const fn any(group: &'static str, keywords: &'static [&'static str]) -> Self {
        Self {
            group,
            keywords,
            guarded: &[],
        }
    }

    /// `lower` must already be lowercased
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| lower.contains(k))
            || self
                .guarded
                .iter()
                .any(|(keyword, veto)| lower.contains(keyword) && !lower.contains(veto))
    }
}

/// Rules for categories from non-`.at` sources, in precedence order
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule::any(
        "Wissenschaft",
        &["wissenschaft", "technik", "science", "ki", "archäologie", "bildung", "datenschutz"],
    ),
    // "Medien" alone is politics; media companies belong to Wirtschaft
    CategoryRule {
        group: "Politik",
        keywords: &["politik", "ausland", "international", "inland", "krieg", "nahost", "soziales"],
        guarded: &[("medien", "unternehmen")],
    },
    CategoryRule::any(
        "Wirtschaft",
        &["wirtschaft", "finanzen", "unternehmen", "netzwerk", "personalia", "business"],
    ),
    CategoryRule::any(
        "Gesellschaft",
        &[
            "gesellschaft",
            "kultur",
            "film",
            "musik",
            "gesundheit",
            "natur",
            "tier",
            "umwelt",
            "unterhaltung",
            "alltag",
            "lifestyle",
            "bezirke",
            "bücher",
            "dating",
            "familie",
            "glücksspiel",
            "haus",
            "garten",
            "hilfe",
            "korrekturen",
            "literatur",
            "reisen",
            "tourismus",
            "weltgeschehen",
            "kunstmarkt",
        ],
    ),
    CategoryRule::any("Sport", &["sport"]),
    CategoryRule::any("Wetter", &["wetter"]),
    CategoryRule::any("Chronik", &["chronik"]),
    CategoryRule::any(FALLBACK_GROUP, &["afrika", "audio", "podcast"]),
    // Österreich is reserved for .at sources
    CategoryRule::any(FALLBACK_GROUP, &["österreich"]),
];

/// Sub-category mappings for `.at` items whose category names no allowed sub
pub const AUSTRIA_SUB_FALLBACKS: &[CategoryRule] = &[
    CategoryRule::any("Gesellschaft", &["kultur", "film", "musik"]),
    CategoryRule::any("Wirtschaft", &["finanzen"]),
    CategoryRule::any("Chronik", &["wetter"]),
];

/// Whether a source URL belongs to the `.at` top-level domain
pub fn is_austrian_domain(source_url: &str) -> bool {
    let url = source_url.to_lowercase();
    url.contains(".at/") || url.ends_with(".at")
}

/// Classify a raw category reported by the source at `source_url`
///
/// `.at` sources always land in Österreich, whatever their category says.
/// Everything else goes through [`CATEGORY_RULES`]; a category no rule knows
/// becomes its own group.
pub fn classify(raw_category: Option<&str>, source_url: Option<&str>) -> TaxonomyEntry {
    let original = raw_category.unwrap_or_default();
    let lower = original.to_lowercase();

    if source_url.is_some_and(is_austrian_domain) {
        return TaxonomyEntry::new(AUSTRIA_GROUP, Some(austria_sub(&lower)), original);
    }

    if original.trim().is_empty() {
        return TaxonomyEntry::new(FALLBACK_GROUP, None, "");
    }

    let group = CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.group)
        .unwrap_or(original);

    TaxonomyEntry::new(group, None, original)
}

/// Classify a loaded record; a missing category counts as Allgemein
pub fn classify_item(item: &NewsItem) -> TaxonomyEntry {
    let category = item
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(FALLBACK_GROUP);
    let source_url = Some(item.source_url.as_str()).filter(|u| !u.is_empty());

    classify(Some(category), source_url)
}

fn austria_sub(lower: &str) -> &'static str {
    AUSTRIA_SUBS
        .iter()
        .copied()
        .find(|sub| lower.contains(&sub.to_lowercase()))
        .or_else(|| {
            AUSTRIA_SUB_FALLBACKS
                .iter()
                .find(|rule| rule.matches(lower))
                .map(|rule| rule.group)
        })
        .unwrap_or(FALLBACK_GROUP)
}
