use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::HolidayCalendar;
use crate::status::Status;

/// One calendar date with its mutable vacation status. Owned exclusively by
/// its [`Month`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    status: Status,
}

impl Day {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            status: Status::Unplanned,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn number(&self) -> u32 {
        self.date.day()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// ISO-8601 date string, the key format of the persisted document.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// ISO weekday number, 1 = Monday .. 7 = Sunday.
    pub fn weekday(&self) -> u32 {
        self.date.weekday().number_from_monday()
    }

    /// Compared against the wall clock at evaluation time.
    pub fn is_today(&self) -> bool {
        self.date == Local::now().date_naive()
    }

    /// Advance the status one step along the cycle. Holidays and weekends are
    /// blocked: the status stays Unplanned and the unchanged pair is
    /// returned. Callers record undo commands; the day itself does not.
    pub fn cycle_status(&mut self, calendar: &HolidayCalendar) -> (Status, Status) {
        if calendar.is_blocked(self.date) {
            return (self.status, self.status);
        }
        let old = self.status;
        self.status = old.next();
        (old, self.status)
    }

    /// Set the status directly, used for drag-paint bulk edits. Same blocking
    /// rule as [`Day::cycle_status`].
    pub fn set_status(&mut self, calendar: &HolidayCalendar, desired: Status) -> (Status, Status) {
        if calendar.is_blocked(self.date) {
            return (self.status, self.status);
        }
        let old = self.status;
        self.status = desired;
        (old, self.status)
    }

    /// Unconditional set, bypassing the blocking rule. Only import and
    /// undo/redo replay go through here.
    pub fn force_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// One month of a [`Year`], holding exactly the valid days of (year, month).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    year: i32,
    number: u32,
    days: Vec<Day>,
}

impl Month {
    fn new(year: i32, number: u32) -> Self {
        let days = (1..=31)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, number, day))
            .map(Day::new)
            .collect();
        Self { year, number, days }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut [Day] {
        &mut self.days
    }
}

/// A full calendar year: twelve months, built eagerly, retained for the
/// whole session once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    number: i32,
    months: Vec<Month>,
}

impl Year {
    pub fn new(number: i32) -> Self {
        let months = (1..=12).map(|month| Month::new(number, month)).collect();
        Self { number, months }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.months.iter().flat_map(|month| month.days.iter())
    }

    pub fn days_mut(&mut self) -> impl Iterator<Item = &mut Day> {
        self.months.iter_mut().flat_map(|month| month.days.iter_mut())
    }

    /// Look up a day by month and day number. `None` when the pair does not
    /// name a real date in this year.
    pub fn find_day(&self, month: u32, day: u32) -> Option<&Day> {
        self.months
            .get(month.checked_sub(1)? as usize)?
            .days
            .get(day.checked_sub(1)? as usize)
    }

    pub fn find_day_mut(&mut self, month: u32, day: u32) -> Option<&mut Day> {
        self.months
            .get_mut(month.checked_sub(1)? as usize)?
            .days
            .get_mut(day.checked_sub(1)? as usize)
    }

    /// Weighted number of days with `status >= min`. Half-holidays (Dec 24,
    /// Dec 31) contribute 0.5, every other day 1.0.
    pub fn count_at_least(&self, min: Status, calendar: &HolidayCalendar) -> f64 {
        self.days()
            .filter(|day| day.status() >= min)
            .map(|day| {
                if calendar.is_half_holiday(day.date()) {
                    0.5
                } else {
                    1.0
                }
            })
            .sum()
    }

    pub fn count_planned(&self, calendar: &HolidayCalendar) -> f64 {
        self.count_at_least(Status::Planned, calendar)
    }

    pub fn count_requested(&self, calendar: &HolidayCalendar) -> f64 {
        self.count_at_least(Status::Requested, calendar)
    }

    pub fn count_approved(&self, calendar: &HolidayCalendar) -> f64 {
        self.count_at_least(Status::Approved, calendar)
    }
}
