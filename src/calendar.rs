use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Easter Sunday dates (month, day) per year. Always a Sunday.
const EASTER_DATES: [(i32, u32, u32); 12] = [
    (2017, 4, 16),
    (2018, 4, 1),
    (2019, 4, 21),
    (2020, 4, 12),
    (2021, 4, 4),
    (2022, 4, 17),
    (2023, 4, 9),
    (2024, 3, 31),
    (2025, 4, 20),
    (2026, 4, 5),
    (2027, 3, 28),
    (2028, 4, 16),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    UnsupportedYear(i32),
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::UnsupportedYear(year) => {
                write!(f, "no Easter date on record for year {year}")
            }
            CalendarError::InvalidDate { year, month, day } => {
                write!(f, "{year}-{month:02}-{day:02} is not a valid calendar date")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

/// German holiday rule set: fixed-date holidays plus six Easter-relative
/// moveable feasts. Weekends are Saturday and Sunday.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolidayCalendar;

impl HolidayCalendar {
    /// Easter Sunday for the given year, from the fixed table. Years outside
    /// the table's range are an error, not a default.
    pub fn easter_sunday(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        EASTER_DATES
            .iter()
            .find(|(y, _, _)| *y == year)
            .map(|&(y, m, d)| {
                NaiveDate::from_ymd_opt(y, m, d).expect("Easter table holds valid dates")
            })
            .ok_or(CalendarError::UnsupportedYear(year))
    }

    /// Holiday name for a date, if any. Fixed rules are checked first, then
    /// the signed day offset from that year's Easter Sunday. Years without a
    /// table entry simply have no moveable feasts.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&'static str> {
        match (date.month(), date.day()) {
            (1, 1) => return Some("New Year's Day"),
            (5, 1) => return Some("Labour Day"),
            (10, 3) => return Some("German Unity Day"),
            (11, 1) => return Some("All Saints' Day"),
            (12, 25) => return Some("Christmas Day"),
            (12, 26) => return Some("2nd Day of Christmas"),
            _ => {}
        }

        let easter = self.easter_sunday(date.year()).ok()?;
        // Ascension is kept at +39, matching the shipped behavior.
        match date.signed_duration_since(easter).num_days() {
            -2 => Some("Good Friday"),
            0 => Some("Easter Sunday"),
            1 => Some("Easter Monday"),
            39 => Some("Ascension Day"),
            50 => Some("Whit Monday"),
            60 => Some("Corpus Christi"),
            _ => None,
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Dec 24 and Dec 31 count as half days in the totals but stay editable.
    pub fn is_half_holiday(&self, date: NaiveDate) -> bool {
        date.month() == 12 && (date.day() == 24 || date.day() == 31)
    }

    /// Blocked days never take a status: holidays and weekends.
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.is_holiday(date) || self.is_weekend(date)
    }

    pub fn is_valid_date(&self, year: i32, month: u32, day: u32) -> bool {
        NaiveDate::from_ymd_opt(year, month, day).is_some()
    }
}
