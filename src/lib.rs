//! Conversion between the Gregorian and Ethiopian calendars.
//!
//! ```
//! use ethiodate::{EthiopianMonth, GregorianDate, gregorian_to_ethiopian};
//!
//! let date = GregorianDate::new(2024, 1, 1)?;
//! let ethiopian = gregorian_to_ethiopian(date);
//! assert_eq!(ethiopian.year(), 2016);
//! assert_eq!(ethiopian.month(), EthiopianMonth::Tahsas);
//! assert_eq!(ethiopian.month_name(), "ታኅሣሥ");
//! # Ok::<(), ethiodate::ParseError>(())
//! ```

mod consts;
mod convert;
mod ethiopian;
mod gregorian;
mod parse;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    ConversionError, ethiopian_to_gregorian, gregorian_to_ethiopian, to_ethiopian, to_gregorian,
};
pub use ethiopian::EthiopianDate;
pub use gregorian::GregorianDate;
pub use parse::{month_from_abbreviation, parse_user_date};
pub use types::{
    Day, EthiopianMonth, Month, Year, days_in_month, is_ethiopian_leap_year, is_leap_year,
    pagume_days,
};

use crate::prelude::*;

/// Errors for date components that are missing, non-numeric or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Unknown month abbreviation: {_0:?} (expected JAN-DEC)")]
    UnknownMonth(String),
    #[display(fmt = "Invalid Ethiopian month: {} (must be 1-{})", "_0", ETHIOPIAN_MONTHS)]
    InvalidEthiopianMonth(u8),
    #[display(
        fmt = "Invalid Ethiopian day: {} (must be 1-{})",
        "_0",
        ETHIOPIAN_MONTH_LENGTH
    )]
    InvalidEthiopianDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
