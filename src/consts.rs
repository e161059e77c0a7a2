/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between day and month in the short display form (`DD/MM`)
pub const SHORT_FORM_SEPARATOR: char = '/';

/// Milliseconds in one calendar day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Day number of 1970-01-01 relative to 0000-03-01 in the proleptic Gregorian calendar
pub(crate) const UNIX_EPOCH_DAY_NUMBER: i64 = 719_468;

/// Minimum destination length accepted by the trip form
pub const MIN_DESTINATION_LEN: usize = 4;

/// Word placed between the two bounds of a formatted range
pub const DEFAULT_RANGE_CONNECTOR: &str = "a";

/// Default fill color of marked calendar days (lime 300)
pub const DEFAULT_MARK_COLOR: &str = "#BEF264";
/// Default text color of marked calendar days (lime 950)
pub const DEFAULT_MARK_TEXT_COLOR: &str = "#1A2E05";
