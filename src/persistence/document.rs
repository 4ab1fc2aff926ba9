use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{PersistenceError, PersistenceResult};
use crate::status::Status;

/// Sparse persisted form of a session: only days whose status is not
/// Unplanned appear in `vacation`, keyed by ISO date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub holidays_per_year: u32,
    pub current_year: i32,
    pub vacation: BTreeMap<String, String>,
}

impl PlanDocument {
    pub fn new(holidays_per_year: u32, current_year: i32) -> Self {
        Self {
            holidays_per_year,
            current_year,
            vacation: BTreeMap::new(),
        }
    }

    /// Parse a document from its JSON text. Structural problems (missing
    /// fields, wrong types) fail here, before any session state is touched.
    pub fn from_json(input: &str) -> PersistenceResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| PersistenceError::MalformedDocument(err.to_string()))
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Entries decoded into typed (date, status) pairs. Entries with an
    /// unparseable date, a non-existent calendar date or an unknown status
    /// string are skipped with a warning rather than failing the import.
    pub fn parsed_entries(&self) -> impl Iterator<Item = (NaiveDate, Status)> + '_ {
        self.vacation.iter().filter_map(|(iso_date, status)| {
            let Ok(date) = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") else {
                warn!("skipping vacation entry with invalid date '{iso_date}'");
                return None;
            };
            let Some(status) = Status::from_str(status) else {
                warn!("skipping vacation entry '{iso_date}' with unknown status '{status}'");
                return None;
            };
            Some((date, status))
        })
    }
}
