//! Reporting periods and locale
//!
//! Summaries and trends run over one of four reporting periods. Each period
//! resolves to a concrete date window relative to "today": the current day,
//! the trailing seven days, the month so far, or the year so far. Labels are
//! localized (the app ships English and Polish).

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for labels, dates, and category names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Pl,
}

impl Locale {
    /// Date format string for this locale
    pub fn date_format(&self) -> &'static str {
        match self {
            Self::En => "%Y-%m-%d",
            Self::Pl => "%d.%m.%Y",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Pl => write!(f, "pl"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pl" => Ok(Self::Pl),
            other => Err(format!("Unknown locale '{}' (expected en or pl)", other)),
        }
    }
}

/// A reporting period for summaries and trends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl ReportPeriod {
    /// Selector label ("This Month" / "Ten miesiąc")
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Day, Locale::En) => "Today",
            (Self::Week, Locale::En) => "This Week",
            (Self::Month, Locale::En) => "This Month",
            (Self::Year, Locale::En) => "This Year",
            (Self::Day, Locale::Pl) => "Dziś",
            (Self::Week, Locale::Pl) => "Ten tydzień",
            (Self::Month, Locale::Pl) => "Ten miesiąc",
            (Self::Year, Locale::Pl) => "Ten rok",
        }
    }

    /// Summary name ("Monthly" / "Miesięcznie")
    pub fn summary_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Day, Locale::En) => "Daily",
            (Self::Week, Locale::En) => "Weekly",
            (Self::Month, Locale::En) => "Monthly",
            (Self::Year, Locale::En) => "Yearly",
            (Self::Day, Locale::Pl) => "Dziennie",
            (Self::Week, Locale::Pl) => "Tygodniowo",
            (Self::Month, Locale::Pl) => "Miesięcznie",
            (Self::Year, Locale::Pl) => "Rocznie",
        }
    }

    /// Resolve the date window for this period, ending on `today`
    ///
    /// Day covers today only; Week the trailing seven days; Month the month
    /// so far; Year the year so far.
    pub fn window(&self, today: NaiveDate) -> PeriodWindow {
        let start = match self {
            Self::Day => today,
            Self::Week => today - Duration::days(7),
            Self::Month => today.with_day(1).unwrap_or(today),
            Self::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };
        PeriodWindow {
            period: *self,
            start,
            end: today,
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(PeriodParseError::Unknown(other.to_string())),
        }
    }
}

/// A resolved date window (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    /// The period this window was resolved from
    pub period: ReportPeriod,

    /// First day covered
    pub start: NaiveDate,

    /// Last day covered
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// The equal-length window ending the day before this one starts,
    /// used for period-over-period comparison
    pub fn previous(&self) -> Self {
        let span = self.end - self.start;
        let end = self.start - Duration::days(1);
        Self {
            period: self.period,
            start: end - span,
            end,
        }
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    Unknown(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::Unknown(s) => {
                write!(f, "Unknown period '{}' (expected day, week, month, or year)", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_window() {
        let w = ReportPeriod::Day.window(d(2025, 3, 15));
        assert_eq!(w.start, d(2025, 3, 15));
        assert_eq!(w.end, d(2025, 3, 15));
    }

    #[test]
    fn test_week_window_is_trailing() {
        let w = ReportPeriod::Week.window(d(2025, 3, 15));
        assert_eq!(w.start, d(2025, 3, 8));
        assert_eq!(w.end, d(2025, 3, 15));
    }

    #[test]
    fn test_month_window() {
        let w = ReportPeriod::Month.window(d(2025, 3, 15));
        assert_eq!(w.start, d(2025, 3, 1));
        assert_eq!(w.end, d(2025, 3, 15));
    }

    #[test]
    fn test_year_window() {
        let w = ReportPeriod::Year.window(d(2025, 3, 15));
        assert_eq!(w.start, d(2025, 1, 1));
        assert_eq!(w.end, d(2025, 3, 15));
    }

    #[test]
    fn test_week_window_crosses_month() {
        let w = ReportPeriod::Week.window(d(2025, 3, 3));
        assert_eq!(w.start, d(2025, 2, 24));
    }

    #[test]
    fn test_previous_window() {
        let w = ReportPeriod::Week.window(d(2025, 3, 15));
        let prev = w.previous();
        assert_eq!(prev.start, d(2025, 2, 28));
        assert_eq!(prev.end, d(2025, 3, 7));

        let day = ReportPeriod::Day.window(d(2025, 3, 1));
        assert_eq!(day.previous().start, d(2025, 2, 28));
        assert_eq!(day.previous().end, d(2025, 2, 28));
    }

    #[test]
    fn test_parse() {
        assert_eq!("month".parse::<ReportPeriod>().unwrap(), ReportPeriod::Month);
        assert_eq!("  WEEK ".parse::<ReportPeriod>().unwrap(), ReportPeriod::Week);
        assert!("quarter".parse::<ReportPeriod>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ReportPeriod::Month.label(Locale::En), "This Month");
        assert_eq!(ReportPeriod::Month.label(Locale::Pl), "Ten miesiąc");
        assert_eq!(ReportPeriod::Week.summary_name(Locale::En), "Weekly");
        assert_eq!(ReportPeriod::Year.summary_name(Locale::Pl), "Rocznie");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ReportPeriod::Month).unwrap();
        assert_eq!(json, "\"month\"");
        let back: ReportPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReportPeriod::Month);

        assert_eq!(serde_json::to_string(&Locale::Pl).unwrap(), "\"pl\"");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::Month);
        assert_eq!(Locale::default(), Locale::Pl);
    }
}
