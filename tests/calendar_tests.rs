use chrono::NaiveDate;
use vacation_tool::{CalendarError, HolidayCalendar};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fixed_holidays_2024() {
    let cal = HolidayCalendar;
    assert_eq!(cal.holiday_name(d(2024, 1, 1)), Some("New Year's Day"));
    assert_eq!(cal.holiday_name(d(2024, 5, 1)), Some("Labour Day"));
    assert_eq!(cal.holiday_name(d(2024, 10, 3)), Some("German Unity Day"));
    assert_eq!(cal.holiday_name(d(2024, 11, 1)), Some("All Saints' Day"));
    assert_eq!(cal.holiday_name(d(2024, 12, 25)), Some("Christmas Day"));
    assert_eq!(cal.holiday_name(d(2024, 12, 26)), Some("2nd Day of Christmas"));
}

#[test]
fn easter_relative_holidays_2024() {
    let cal = HolidayCalendar;
    assert_eq!(cal.easter_sunday(2024).unwrap(), d(2024, 3, 31));
    assert_eq!(cal.holiday_name(d(2024, 3, 29)), Some("Good Friday"));
    assert_eq!(cal.holiday_name(d(2024, 3, 31)), Some("Easter Sunday"));
    assert_eq!(cal.holiday_name(d(2024, 4, 1)), Some("Easter Monday"));
    // Easter Sunday + 39 days
    assert_eq!(cal.holiday_name(d(2024, 5, 9)), Some("Ascension Day"));
    assert_eq!(cal.holiday_name(d(2024, 5, 20)), Some("Whit Monday"));
    assert_eq!(cal.holiday_name(d(2024, 5, 30)), Some("Corpus Christi"));
}

#[test]
fn new_years_day_2024_is_a_holiday_monday_not_weekend() {
    let cal = HolidayCalendar;
    let date = d(2024, 1, 1);
    assert!(cal.is_holiday(date));
    assert!(!cal.is_weekend(date));
    assert_eq!(date.format("%A").to_string(), "Monday");
}

#[test]
fn classification_is_stable() {
    let cal = HolidayCalendar;
    for (m, day) in [(1, 1), (3, 31), (5, 9), (7, 15), (12, 24)] {
        let date = d(2024, m, day);
        assert_eq!(cal.holiday_name(date), cal.holiday_name(date));
    }
}

#[test]
fn easter_outside_table_is_an_error() {
    let cal = HolidayCalendar;
    assert_eq!(
        cal.easter_sunday(2016),
        Err(CalendarError::UnsupportedYear(2016))
    );
    assert_eq!(
        cal.easter_sunday(2029),
        Err(CalendarError::UnsupportedYear(2029))
    );
}

#[test]
fn unsupported_year_keeps_fixed_holidays_and_drops_moveable_ones() {
    let cal = HolidayCalendar;
    assert_eq!(cal.holiday_name(d(2030, 12, 25)), Some("Christmas Day"));
    // Easter 2030 falls on April 21; without a table entry it is a plain day.
    assert_eq!(cal.holiday_name(d(2030, 4, 21)), None);
}

#[test]
fn weekends_and_half_holidays() {
    let cal = HolidayCalendar;
    assert!(cal.is_weekend(d(2024, 7, 6))); // Saturday
    assert!(cal.is_weekend(d(2024, 7, 7))); // Sunday
    assert!(!cal.is_weekend(d(2024, 7, 8))); // Monday

    assert!(cal.is_half_holiday(d(2024, 12, 24)));
    assert!(cal.is_half_holiday(d(2024, 12, 31)));
    assert!(!cal.is_half_holiday(d(2024, 12, 23)));

    // Half-holidays are not blocked unless they fall on a weekend.
    assert!(!cal.is_blocked(d(2024, 12, 24))); // Tuesday
    assert!(cal.is_blocked(d(2024, 12, 25)));
    assert!(cal.is_blocked(d(2024, 7, 6)));
}

#[test]
fn date_validity() {
    let cal = HolidayCalendar;
    assert!(cal.is_valid_date(2024, 2, 29)); // leap year
    assert!(!cal.is_valid_date(2023, 2, 29));
    assert!(!cal.is_valid_date(2024, 4, 31));
    assert!(!cal.is_valid_date(2024, 13, 1));
    assert!(!cal.is_valid_date(2024, 1, 0));
}
