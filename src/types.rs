use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, ETHIOPIAN_MONTH_LENGTH, ETHIOPIAN_MONTH_NAMES, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, PAGUME_DAYS,
    PAGUME_DAYS_LEAP,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU8, NonZeroU16};

/// A Gregorian year in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

/// A Gregorian month in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A Gregorian day of month, validated against its year and month on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a day that exists in the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(day) if value <= days_in_month(year.get(), month.get()) => Ok(Self(day)),
            _ => Err(ParseError::InvalidDay {
                year: year.get(),
                month: month.get(),
                day: value,
            }),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// The thirteen months of the Ethiopian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum EthiopianMonth {
    Meskerem = 1,
    Tikimt,
    Hidar,
    Tahsas,
    Tir,
    Yekatit,
    Megabit,
    Miyazya,
    Ginbot,
    Sene,
    Hamle,
    Nehase,
    /// Intercalary month of 5 days, 6 in a leap year
    Pagume,
}

impl EthiopianMonth {
    /// All months in calendar order
    pub const ALL: [Self; 13] = [
        Self::Meskerem,
        Self::Tikimt,
        Self::Hidar,
        Self::Tahsas,
        Self::Tir,
        Self::Yekatit,
        Self::Megabit,
        Self::Miyazya,
        Self::Ginbot,
        Self::Sene,
        Self::Hamle,
        Self::Nehase,
        Self::Pagume,
    ];

    /// # Errors
    /// Returns `ParseError::InvalidEthiopianMonth` unless `1 <= value <= 13`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(ParseError::InvalidEthiopianMonth(value))
    }

    /// 1-based month number
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Month name in Ge'ez script
    pub const fn name(self) -> &'static str {
        ETHIOPIAN_MONTH_NAMES[self as usize - 1]
    }

    /// Number of days the month has in the given Ethiopian year
    pub const fn days(self, year: i32) -> u8 {
        match self {
            Self::Pagume => pagume_days(year),
            _ => ETHIOPIAN_MONTH_LENGTH,
        }
    }
}

impl TryFrom<u8> for EthiopianMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EthiopianMonth> for u8 {
    fn from(month: EthiopianMonth) -> Self {
        month.get()
    }
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// An Ethiopian year is a leap year when it is the last of its four-year cycle.
pub const fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE as i32) == LEAP_YEAR_CYCLE as i32 - 1
}

pub const fn pagume_days(year: i32) -> u8 {
    if is_ethiopian_leap_year(year) {
        PAGUME_DAYS_LEAP
    } else {
        PAGUME_DAYS
    }
}
