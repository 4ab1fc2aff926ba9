use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use std::collections::BTreeMap;

use crate::calendar::{CalendarError, HolidayCalendar};
use crate::history::{CommandHistory, DayEdit};
use crate::persistence::PlanDocument;
use crate::status::Status;
use crate::year::{Day, Year};

/// Yearly vacation entitlement written into every exported document. A
/// configured constant, not derived from the marked days.
pub const HOLIDAYS_PER_YEAR: u32 = 30;

/// Snapshot of the flags a shell needs to enable undo/redo affordances and
/// to prompt for saving. Returned from every state-changing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub undo_available: bool,
    pub redo_available: bool,
    pub dirty: bool,
}

/// One editing session: the lazily grown year map, the active year, the
/// undo/redo history and the drag-paint state. Owns no I/O; the shell talks
/// to it through direct synchronous calls.
pub struct EditingSession {
    years: BTreeMap<i32, Year>,
    current_year: i32,
    total_days_available: u32,
    calendar: HolidayCalendar,
    history: CommandHistory,
    paint_status: Option<Status>,
    dirty: bool,
}

impl EditingSession {
    /// Session starting at the wall-clock year.
    pub fn new() -> Self {
        Self::with_year(Local::now().date_naive().year())
    }

    /// Session starting at a fixed year, for deterministic construction.
    pub fn with_year(year: i32) -> Self {
        let mut years = BTreeMap::new();
        years.insert(year, Year::new(year));
        Self {
            years,
            current_year: year,
            total_days_available: HOLIDAYS_PER_YEAR,
            calendar: HolidayCalendar,
            history: CommandHistory::new(),
            paint_status: None,
            dirty: false,
        }
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn total_days_available(&self) -> u32 {
        self.total_days_available
    }

    pub fn year(&self, number: i32) -> Option<&Year> {
        self.years.get(&number)
    }

    pub fn day(&self, year: i32, month: u32, day: u32) -> Option<&Day> {
        self.years.get(&year)?.find_day(month, day)
    }

    /// Navigate to a year, creating it on first visit. Years are retained
    /// for the rest of the session.
    pub fn set_current_year(&mut self, number: i32) {
        self.years.entry(number).or_insert_with(|| Year::new(number));
        self.current_year = number;
    }

    pub fn availability(&self) -> Availability {
        Availability {
            undo_available: self.history.can_undo(),
            redo_available: self.history.can_redo(),
            dirty: self.dirty,
        }
    }

    /// Drop everything and start over with a freshly built current year.
    pub fn reset(&mut self) -> Availability {
        debug!("resetting session to year {}", self.current_year);
        self.years.clear();
        self.years
            .insert(self.current_year, Year::new(self.current_year));
        self.history.clear();
        self.paint_status = None;
        self.dirty = false;
        self.availability()
    }

    /// Click on a day: cycle its status, record an undo step if it changed,
    /// and arm the drag-paint status with the result. Arming happens even
    /// for blocked days, so a drag started on one paints Unplanned.
    pub fn edit_day(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Availability, CalendarError> {
        let date = Self::valid_date(year, month, day)?;
        let calendar = self.calendar;
        let (old, new) = Self::day_entry(&mut self.years, date).cycle_status(&calendar);
        self.paint_status = Some(new);
        if old != new {
            self.history.push(DayEdit { date, old, new });
            self.dirty = true;
        }
        Ok(self.availability())
    }

    /// The mousedown that begins a drag gesture.
    pub fn paint_start(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Availability, CalendarError> {
        self.edit_day(year, month, day)
    }

    /// Drag over a day: apply the armed status and merge the change into the
    /// gesture's undo step. No-op when no drag is active.
    pub fn paint_day(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Availability, CalendarError> {
        let Some(paint) = self.paint_status else {
            return Ok(self.availability());
        };
        let date = Self::valid_date(year, month, day)?;
        let calendar = self.calendar;
        let (old, new) = Self::day_entry(&mut self.years, date).set_status(&calendar, paint);
        if old != new {
            self.history.coalesce(DayEdit { date, old, new });
            self.dirty = true;
        }
        Ok(self.availability())
    }

    /// The mouseup that ends a drag gesture.
    pub fn paint_end(&mut self) {
        self.paint_status = None;
    }

    /// Revert the most recent undo step, restoring its old statuses in
    /// reverse application order.
    pub fn undo(&mut self) -> Availability {
        if let Some(command) = self.history.undo() {
            for edit in command.edits().iter().rev() {
                Self::day_entry(&mut self.years, edit.date).force_status(edit.old);
            }
            self.dirty = true;
        }
        self.availability()
    }

    /// Reapply the most recently undone step in forward order.
    pub fn redo(&mut self) -> Availability {
        if let Some(command) = self.history.redo() {
            for edit in command.edits() {
                Self::day_entry(&mut self.years, edit.date).force_status(edit.new);
            }
            self.dirty = true;
        }
        self.availability()
    }

    /// Sparse snapshot of every year held in the session.
    pub fn export_document(&self) -> PlanDocument {
        let mut document = PlanDocument::new(HOLIDAYS_PER_YEAR, self.current_year);
        for year in self.years.values() {
            for day in year.days() {
                if day.status() != Status::Unplanned {
                    document
                        .vacation
                        .insert(day.iso_date(), day.status().as_str().to_string());
                }
            }
        }
        document
    }

    /// Replace the whole session state with a document's contents. Import
    /// bypasses the blocking rule and the history, and leaves the session
    /// clean (the document is the new baseline). Entries in a year other
    /// than the active one move the active year as they are applied.
    pub fn import_document(&mut self, document: &PlanDocument) -> Availability {
        self.years.clear();
        self.history.clear();
        self.paint_status = None;
        self.total_days_available = document.holidays_per_year;
        self.current_year = document.current_year;
        self.years
            .insert(self.current_year, Year::new(self.current_year));

        let mut applied = 0usize;
        for (date, status) in document.parsed_entries() {
            if date.year() != self.current_year {
                self.set_current_year(date.year());
            }
            Self::day_entry(&mut self.years, date).force_status(status);
            applied += 1;
        }
        debug!(
            "imported {applied} of {} vacation entries",
            document.vacation.len()
        );
        self.dirty = false;
        self.availability()
    }

    /// Weighted totals for the active year.
    pub fn count_planned(&self) -> f64 {
        self.count_at_least(Status::Planned)
    }

    pub fn count_requested(&self) -> f64 {
        self.count_at_least(Status::Requested)
    }

    pub fn count_approved(&self) -> f64 {
        self.count_at_least(Status::Approved)
    }

    /// Entitlement left after the planned days of the active year.
    pub fn days_remaining(&self) -> f64 {
        f64::from(self.total_days_available) - self.count_planned()
    }

    fn count_at_least(&self, min: Status) -> f64 {
        self.years
            .get(&self.current_year)
            .map(|year| year.count_at_least(min, &self.calendar))
            .unwrap_or(0.0)
    }

    fn valid_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    fn day_entry(years: &mut BTreeMap<i32, Year>, date: NaiveDate) -> &mut Day {
        years
            .entry(date.year())
            .or_insert_with(|| Year::new(date.year()))
            .find_day_mut(date.month(), date.day())
            .expect("a valid date always has a day entry in its year")
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}
