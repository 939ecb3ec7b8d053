/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for September, the month the Ethiopian year turns over in
pub const SEPTEMBER: u8 = 9;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Three-letter Gregorian month abbreviations accepted by `parse_user_date`
pub const GREGORIAN_MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Number of Ethiopian months, Pagume included
pub const ETHIOPIAN_MONTHS: u8 = 13;

/// Length of the twelve regular Ethiopian months
pub const ETHIOPIAN_MONTH_LENGTH: u8 = 30;

/// Pagume length in a common year
pub const PAGUME_DAYS: u8 = 5;
/// Pagume length in an Ethiopian leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Ethiopian month names in Ge'ez script, Meskerem first
pub const ETHIOPIAN_MONTH_NAMES: [&str; 13] = [
    "መስከረም", // Meskerem
    "ጥቅምት",  // Tikimt
    "ኅዳር",   // Hidar
    "ታኅሣሥ",  // Tahsas
    "ጥር",    // Tir
    "የካቲት",  // Yekatit
    "መጋቢት",  // Megabit
    "ሚያዝያ",  // Miyazya
    "ግንቦት",  // Ginbot
    "ሰኔ",    // Sene
    "ሐምሌ",   // Hamle
    "ነሐሴ",   // Nehase
    "ጳጉሜ",   // Pagume
];

/// Epoch anchoring all day-count arithmetic: Gregorian 1582-10-15
pub const EPOCH: (u16, u8, u8) = (1582, 10, 15);

/// Gregorian year minus this gives the Ethiopian year
pub const ETHIOPIAN_YEAR_OFFSET: i32 = 8;

/// Last Gregorian September day that still belongs to the old Ethiopian year
pub const NEW_YEAR_EVE: u8 = 10;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
