//! Calendar month used for invoice periods and monthly totals

use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// A year and month, ordered chronologically.
///
/// Serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidInput(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one (January wraps to December)
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Whether `date` falls in this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Indonesian long label, e.g. "Januari 2024"
    pub fn long_label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.index()], self.year)
    }

    /// Indonesian short label, e.g. "Jan 2024"
    pub fn short_label(&self) -> String {
        format!("{} {}", MONTH_SHORT_NAMES[self.index()], self.year)
    }

    fn index(&self) -> usize {
        (self.month - 1) as usize
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidInput(format!("Expected YYYY-MM, got {:?}", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(ym("2024-01").to_string(), "2024-01");
        assert_eq!(ym("2024-12").month(), 12);
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024-1".parse::<YearMonth>().is_err());
        assert!("24-01".parse::<YearMonth>().is_err());
        assert!("01/2024".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_chronological_order() {
        assert!(ym("2023-12") < ym("2024-01"));
        assert!(ym("2024-02") > ym("2024-01"));
        assert!(ym("2024-10") > ym("2024-09"));
    }

    #[test]
    fn test_previous_wraps_year() {
        assert_eq!(ym("2024-01").previous(), ym("2023-12"));
        assert_eq!(ym("2024-07").previous(), ym("2024-06"));
    }

    #[test]
    fn test_contains() {
        let jan = ym("2024-01");
        assert!(jan.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            ym("2024-02").last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            ym("2023-12").last_day(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert_eq!(
            ym("2024-05").first_day(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ym("2024-01").long_label(), "Januari 2024");
        assert_eq!(ym("2024-08").short_label(), "Agu 2024");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ym("2024-03")).unwrap();
        assert_eq!(json, "\"2024-03\"");
        let parsed: YearMonth = serde_json::from_str("\"2025-11\"").unwrap();
        assert_eq!(parsed, ym("2025-11"));
    }
}
