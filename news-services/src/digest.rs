//! News digest
//!
//! Turns the raw records of one day into what a reader sees: hidden items
//! removed, every item classified, a navigation of groups and subs, and
//! prioritized sections for the active filter.

use indexmap::IndexMap;
use serde::Deserialize;

use news_core::{
    compare_groups, compare_subs, ClassifiedNewsItem, NavigationGroup, NewsDigest, NewsItem,
    NewsSection,
};

use crate::calendar::display_date;
use crate::classifier::classify_item;
use crate::football::{is_football, prioritize};
use crate::resolver::ResolvedNews;

/// Reader filters for a digest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DigestQuery {
    /// Only items of this group
    pub group: Option<String>,
    /// Only items of this sub (within `group`)
    pub sub: Option<String>,
    /// Case-insensitive text search in headline, teaser and source name
    pub q: Option<String>,
}

impl DigestQuery {
    fn group(&self) -> Option<&str> {
        non_blank(self.group.as_deref())
    }

    fn sub(&self) -> Option<&str> {
        non_blank(self.sub.as_deref())
    }

    fn search(&self) -> Option<String> {
        non_blank(self.q.as_deref()).map(str::to_lowercase)
    }

    fn matches(&self, item: &ClassifiedNewsItem, search: Option<&str>) -> bool {
        if let Some(group) = self.group() {
            if item.taxonomy.group != group {
                return false;
            }
        }
        if let Some(sub) = self.sub() {
            if item.taxonomy.sub.as_deref() != Some(sub) {
                return false;
            }
        }
        match search {
            Some(needle) => [&item.item.headline, &item.item.teaser, &item.item.source_name]
                .iter()
                .any(|field| field.to_lowercase().contains(needle)),
            None => true,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Drop hidden items and classify the rest
pub fn classify_all(items: Vec<NewsItem>) -> Vec<ClassifiedNewsItem> {
    items
        .into_iter()
        .filter(|item| !item.is_ignored())
        .map(|item| ClassifiedNewsItem {
            taxonomy: classify_item(&item),
            football: is_football(&item),
            item,
        })
        .collect()
}

/// Groups present in `items` with their subs, both in display order
pub fn navigation(items: &[ClassifiedNewsItem]) -> Vec<NavigationGroup> {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for item in items {
        let subs = groups.entry(item.taxonomy.group.as_str()).or_default();
        if let Some(sub) = item.taxonomy.sub.as_deref() {
            if !subs.contains(&sub) {
                subs.push(sub);
            }
        }
    }

    groups.sort_by(|a, _, b, _| compare_groups(a, b));
    groups
        .into_iter()
        .map(|(group, mut subs)| {
            subs.sort_by(|a, b| compare_subs(a, b));
            NavigationGroup {
                group: group.to_string(),
                subs: subs.into_iter().map(str::to_string).collect(),
            }
        })
        .collect()
}

/// Build the digest for one resolved day
pub fn build_digest(resolved: ResolvedNews, query: &DigestQuery) -> NewsDigest {
    let classified = classify_all(resolved.items);
    let navigation = navigation(&classified);

    let search = query.search();
    let mut sections: IndexMap<String, Vec<ClassifiedNewsItem>> = IndexMap::new();
    let mut total = 0;
    for item in classified {
        if !query.matches(&item, search.as_deref()) {
            continue;
        }
        total += 1;
        sections
            .entry(item.taxonomy.group.clone())
            .or_default()
            .push(item);
    }

    sections.sort_by(|a, _, b, _| compare_groups(a, b));
    let sections = sections
        .into_iter()
        .map(|(group, mut items)| {
            prioritize(&mut items);
            NewsSection { group, items }
        })
        .collect();

    NewsDigest {
        date: resolved.date,
        display_date: display_date(resolved.date),
        total,
        navigation,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(headline: &str, category: &str, url: &str) -> NewsItem {
        NewsItem {
            headline: headline.to_string(),
            category: Some(category.to_string()),
            source_url: url.to_string(),
            source_name: "Quelle".to_string(),
            ..Default::default()
        }
    }

    fn resolved(items: Vec<NewsItem>) -> ResolvedNews {
        ResolvedNews {
            date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
            shards: vec!["2026-02-09.json".to_string()],
            items,
        }
    }

    fn sample() -> Vec<NewsItem> {
        vec![
            item("Abfahrt in Kitzbühel", "Sport", "https://orf.at/sport/1"),
            item("Tabellenführer patzt", "Sport", "https://orf.at/sport/3"),
            item("Gemeinderat tagt", "Wien", "https://wien.orf.at/stories/2"),
            item("Wahlen in Übersee", "Ausland", "https://www.tagesschau.de/ausland/4"),
            item("Neues Album", "Musik", "https://www.spiegel.de/kultur/5"),
            NewsItem {
                ignore: Some(true),
                ..item("Versteckt", "Sport", "https://orf.at/sport/6")
            },
        ]
    }

    fn headlines(section: &NewsSection) -> Vec<&str> {
        section.items.iter().map(|i| i.item.headline.as_str()).collect()
    }

    #[test]
    fn test_ignored_items_are_dropped() {
        let classified = classify_all(sample());
        assert_eq!(classified.len(), 5);
        assert!(classified.iter().all(|i| i.item.headline != "Versteckt"));
    }

    #[test]
    fn test_navigation_order() {
        let nav = navigation(&classify_all(sample()));
        let groups: Vec<&str> = nav.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(groups, vec!["Österreich", "Politik", "Gesellschaft"]);
        assert_eq!(nav[0].subs, vec!["Sport", "Wien"]);
        assert!(nav[1].subs.is_empty());
    }

    #[test]
    fn test_digest_sections_are_prioritized() {
        let digest = build_digest(resolved(sample()), &DigestQuery::default());

        assert_eq!(digest.total, 5);
        assert_eq!(digest.display_date, "Montag, 9. Februar 2026");
        assert_eq!(digest.sections[0].group, "Österreich");
        assert_eq!(
            headlines(&digest.sections[0]),
            vec!["Tabellenführer patzt", "Abfahrt in Kitzbühel", "Gemeinderat tagt"]
        );
    }

    #[test]
    fn test_group_and_sub_filter() {
        let query = DigestQuery {
            group: Some("Österreich".to_string()),
            sub: Some("Wien".to_string()),
            q: None,
        };
        let digest = build_digest(resolved(sample()), &query);

        assert_eq!(digest.total, 1);
        assert_eq!(digest.sections.len(), 1);
        assert_eq!(headlines(&digest.sections[0]), vec!["Gemeinderat tagt"]);
        // Navigation always lists every group of the day
        assert_eq!(digest.navigation.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = DigestQuery {
            q: Some("  ALBUM ".to_string()),
            ..Default::default()
        };
        let digest = build_digest(resolved(sample()), &query);

        assert_eq!(digest.total, 1);
        assert_eq!(digest.sections[0].group, "Gesellschaft");
    }

    #[test]
    fn test_blank_filters_are_ignored() {
        let query = DigestQuery {
            group: Some(String::new()),
            sub: Some(" ".to_string()),
            q: Some(String::new()),
        };
        assert_eq!(build_digest(resolved(sample()), &query).total, 5);
    }
}
