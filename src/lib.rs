pub mod calendar;
pub mod history;
pub mod persistence;
pub mod session;
pub mod status;
pub mod year;

pub use calendar::{CalendarError, HolidayCalendar};
pub use history::{Command, CommandHistory, DayEdit};
pub use persistence::{
    PersistenceError, PlanDocument, load_document_from_csv, load_document_from_json,
    save_document_to_csv, save_document_to_json,
};
pub use session::{Availability, EditingSession, HOLIDAYS_PER_YEAR};
pub use status::Status;
pub use year::{Day, Month, Year};
