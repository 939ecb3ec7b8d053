use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::consts::{ETHIOPIAN_MONTH_LENGTH, MIN_DAY};
use crate::prelude::*;
use crate::types::EthiopianMonth;

/// A date in the Ethiopian calendar.
///
/// Construction checks that the month is 1-13 and the day is 1-30. Whether a
/// Pagume day fits that year's Pagume is checked on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02} ({})", "year", "month.get()", "day", "month.name()")]
pub struct EthiopianDate {
    year: i32,
    month: EthiopianMonth,
    day: u8,
}

impl EthiopianDate {
    /// # Errors
    /// Returns `ParseError::InvalidEthiopianMonth` or `ParseError::InvalidEthiopianDay`
    /// for out-of-range components.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month = EthiopianMonth::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// # Errors
    /// Returns `ParseError::InvalidEthiopianDay` unless `1 <= day <= 30`.
    pub fn from_parts(year: i32, month: EthiopianMonth, day: u8) -> Result<Self, ParseError> {
        if !(MIN_DAY..=ETHIOPIAN_MONTH_LENGTH).contains(&day) {
            return Err(ParseError::InvalidEthiopianDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// For days taken from the 30-day cycle, already in `1..=30`
    pub(crate) const fn from_cycle_day(year: i32, month: EthiopianMonth, day: u8) -> Self {
        debug_assert!(day >= MIN_DAY && day <= ETHIOPIAN_MONTH_LENGTH);
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> EthiopianMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Whether the day exists in its month for this year, Pagume length included
    pub const fn is_within_month(&self) -> bool {
        self.day <= self.month.days(self.year)
    }
}

/// Serialized form, with the month name alongside the number
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EthiopianDateRef<'a> {
    year: i32,
    month: EthiopianMonth,
    day: u8,
    month_name: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EthiopianDateRaw {
    year: i32,
    month: EthiopianMonth,
    day: u8,
}

impl Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        EthiopianDateRef {
            year: self.year,
            month: self.month,
            day: self.day,
            month_name: self.month.name(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EthiopianDate {
    /// `monthName` is accepted but ignored; the name always follows the month number.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = EthiopianDateRaw::deserialize(deserializer)?;
        Self::from_parts(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}
