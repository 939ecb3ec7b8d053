use crate::ParseError;
use crate::consts::GREGORIAN_MONTH_ABBREVIATIONS;
use crate::gregorian::GregorianDate;
use crate::types::{Month, Year};

/// Looks up a three-letter month abbreviation, ignoring case.
///
/// # Errors
/// Returns `ParseError::UnknownMonth` if it is not one of `JAN`..`DEC`.
pub fn month_from_abbreviation(abbreviation: &str) -> Result<Month, ParseError> {
    let upper = abbreviation.trim().to_uppercase();
    let index = GREGORIAN_MONTH_ABBREVIATIONS
        .iter()
        .position(|name| *name == upper)
        .ok_or_else(|| ParseError::UnknownMonth(abbreviation.to_owned()))?;
    // index < 12, so the month number fits
    Month::new(index as u8 + 1)
}

/// Builds a Gregorian date from user input such as `("2024", "JAN", "1")`.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` for a non-numeric year, `ParseError::UnknownMonth`
/// for an unrecognized abbreviation, `ParseError::EmptyInput` for a missing day, and the
/// usual range errors if the three parts do not form a real date.
pub fn parse_user_date(year: &str, month: &str, day: &str) -> Result<GregorianDate, ParseError> {
    let year = year
        .trim()
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(year.to_owned()))?;
    let month = month_from_abbreviation(month)?;

    let day = day.trim();
    if day.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let day = day
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(day.to_owned()))?;

    let date = GregorianDate::from_parts(Year::new(year)?, month, day)?;
    tracing::trace!(%date, "parsed user date");
    Ok(date)
}
