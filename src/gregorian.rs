use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::ParseError;
use crate::consts::{DATE_SEPARATOR, EPOCH, MAX_YEAR};
use crate::parse::parse_user_date;
use crate::prelude::*;
use crate::types::{Day, Month, Year};

/// The epoch (1582-10-15) all day counts start from
const EPOCH_DATE: NaiveDate =
    match NaiveDate::from_ymd_opt(EPOCH.0 as i32, EPOCH.1 as u32, EPOCH.2 as u32) {
        Some(date) => date,
        None => panic!("epoch is not a valid date"),
    };

/// A proleptic Gregorian calendar day in years `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "date.year()", "date.month()", "date.day()")]
pub struct GregorianDate {
    date: NaiveDate,
}

impl GregorianDate {
    /// Creates a date, checking that the day exists in that month and year.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from components that are already validated individually
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, ParseError> {
        let day = Day::new(day, year, month)?;
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .map(|date| Self { date })
        .ok_or(ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: day.get(),
        })
    }

    pub fn year(&self) -> u16 {
        // constructors keep the year in 1..=MAX_YEAR
        self.date.year() as u16
    }

    pub fn month(&self) -> u8 {
        self.date.month() as u8
    }

    pub fn day(&self) -> u8 {
        self.date.day() as u8
    }

    /// Whole days from the epoch (1582-10-15) to this date, negative before it.
    pub fn days_since_epoch(&self) -> i64 {
        (self.date - EPOCH_DATE).num_days()
    }

    /// The date `days` whole days after the epoch.
    /// Returns `None` outside years `1..=MAX_YEAR`.
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        let date = EPOCH_DATE.checked_add_signed(TimeDelta::try_days(days)?)?;
        if !(1..=i32::from(MAX_YEAR)).contains(&date.year()) {
            return None;
        }
        Some(Self { date })
    }

    /// Converts to a `(year, month, day)` tuple
    pub fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// The underlying chrono date
    pub const fn as_naive_date(&self) -> NaiveDate {
        self.date
    }

    fn parse_iso(parts: &[&str]) -> Result<Self, ParseError> {
        let [year, month, day] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("-")));
        };
        let year = year
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Accepts ISO `YYYY-MM-DD` or the user form `YYYY MMM DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if trimmed.contains(DATE_SEPARATOR) {
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
            return Self::parse_iso(&parts);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            [year, month, day] => parse_user_date(year, month, day),
            _ => Err(ParseError::InvalidFormat(trimmed.to_owned())),
        }
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_rejects_impossible_dates() {
        assert!(GregorianDate::new(2023, 2, 29).is_err());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            GregorianDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 6, 31),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(date(1582, 10, 15).days_since_epoch(), 0);
        assert_eq!(date(1582, 10, 14).days_since_epoch(), -1);
        assert_eq!(date(1582, 10, 16).days_since_epoch(), 1);
    }

    #[test]
    fn test_days_since_epoch_known_values() {
        assert_eq!(date(2024, 1, 1).days_since_epoch(), 161_150);
        assert_eq!(date(2024, 9, 11).days_since_epoch(), 161_404);
        assert_eq!(date(9999, 12, 31).days_since_epoch(), 3_074_323);
        assert_eq!(date(1, 1, 1).days_since_epoch(), -577_735);
    }

    #[test]
    fn test_from_days_since_epoch() {
        assert_eq!(GregorianDate::from_days_since_epoch(0), Some(date(1582, 10, 15)));
        assert_eq!(
            GregorianDate::from_days_since_epoch(161_150),
            Some(date(2024, 1, 1))
        );
        assert_eq!(
            GregorianDate::from_days_since_epoch(-577_735),
            Some(date(1, 1, 1))
        );
        assert_eq!(GregorianDate::from_days_since_epoch(-577_736), None);
        assert_eq!(GregorianDate::from_days_since_epoch(3_074_324), None);
        assert_eq!(GregorianDate::from_days_since_epoch(i64::MAX), None);
        assert_eq!(GregorianDate::from_days_since_epoch(i64::MIN), None);
    }

    #[test]
    fn test_day_numbers_are_contiguous_across_leap_february() {
        let feb28 = date(2024, 2, 28).days_since_epoch();
        assert_eq!(date(2024, 2, 29).days_since_epoch(), feb28 + 1);
        assert_eq!(date(2024, 3, 1).days_since_epoch(), feb28 + 2);

        let century = date(1900, 2, 28).days_since_epoch();
        assert_eq!(date(1900, 3, 1).days_since_epoch(), century + 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 1, 1).to_string(), "2024-01-01");
        assert_eq!(date(33, 12, 5).to_string(), "0033-12-05");
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!("2024-01-01".parse::<GregorianDate>().unwrap(), date(2024, 1, 1));
        assert_eq!(" 2024 - 9 - 11 ".parse::<GregorianDate>().unwrap(), date(2024, 9, 11));
        assert!(matches!(
            "2024-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-xx-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<GregorianDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_user_form() {
        assert_eq!("2024 JAN 1".parse::<GregorianDate>().unwrap(), date(2024, 1, 1));
        assert_eq!("2024 sep 11".parse::<GregorianDate>().unwrap(), date(2024, 9, 11));
        assert!(matches!(
            "2024 XXX 1".parse::<GregorianDate>(),
            Err(ParseError::UnknownMonth(_))
        ));
        assert!(matches!(
            "2024 JAN".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<GregorianDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<GregorianDate>(), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_serde_as_iso_string() {
        let d = date(2024, 9, 11);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-09-11\"");

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<GregorianDate>("\"2024-02-30\"").is_err());
    }

    #[test]
    fn test_naive_date_matches_components() {
        let d = date(2024, 2, 29);
        assert_eq!(d.as_naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(d.to_tuple(), (2024, 2, 29));
    }

    #[test]
    fn test_ordering_follows_calendar() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
    }
}
