//! Civil date resolution
//!
//! Shards are named after the civil date of the audience, not of the
//! serving host. All "today" / "yesterday" arithmetic happens in one fixed
//! timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use news_core::{NewsError, NewsResult};

/// Timezone of the audience
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Vienna;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Which day a reader asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRequest {
    #[default]
    Today,
    Yesterday,
    On(NaiveDate),
}

impl DateRequest {
    /// Parse the `date` query parameter; a missing or blank value means today
    pub fn from_param(param: Option<&str>) -> NewsResult<Self> {
        match param.map(str::trim) {
            None | Some("") => Ok(DateRequest::Today),
            Some(raw) => raw.parse(),
        }
    }
}

impl FromStr for DateRequest {
    type Err = NewsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" | "heute" => Ok(DateRequest::Today),
            "yesterday" | "gestern" => Ok(DateRequest::Yesterday),
            _ => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(DateRequest::On)
                .map_err(|_| NewsError::invalid_date(s)),
        }
    }
}

impl fmt::Display for DateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRequest::Today => write!(f, "today"),
            DateRequest::Yesterday => write!(f, "yesterday"),
            DateRequest::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Resolves date requests in a fixed timezone
#[derive(Debug, Clone, Copy)]
pub struct NewsCalendar {
    tz: Tz,
}

impl Default for NewsCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl NewsCalendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Civil date of `now` in the calendar's timezone
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Civil date before `today(now)`
    ///
    /// Steps back from noon of today so a DST switch can never land the
    /// subtraction on the wrong day.
    pub fn yesterday(&self, now: DateTime<Utc>) -> NaiveDate {
        let today = self.today(now);

        NaiveTime::from_hms_opt(12, 0, 0)
            .and_then(|noon| self.tz.from_local_datetime(&today.and_time(noon)).single())
            .and_then(|midday| midday.checked_sub_signed(TimeDelta::days(1)))
            .map(|previous| previous.date_naive())
            .or_else(|| today.pred_opt())
            .unwrap_or(today)
    }

    pub fn resolve(&self, request: DateRequest, now: DateTime<Utc>) -> NaiveDate {
        match request {
            DateRequest::Today => self.today(now),
            DateRequest::Yesterday => self.yesterday(now),
            DateRequest::On(date) => date,
        }
    }
}

/// Canonical shard prefix for a date (`YYYY-MM-DD`)
pub fn shard_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// German long date, e.g. "Montag, 9. Februar 2026"
pub fn display_date(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    };
    const MONTHS: [&str; 12] = [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ];
    let month = MONTHS[date.month0() as usize];

    format!("{}, {}. {} {}", weekday, date.day(), month, date.year())
}
