use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use super::{PersistenceError, PersistenceResult, PlanDocument};

pub fn save_document_to_json<P: AsRef<Path>>(
    document: &PlanDocument,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, document)?;
    Ok(())
}

pub fn load_document_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<PlanDocument> {
    let file = File::open(path)?;
    serde_json::from_reader(file)
        .map_err(|err| PersistenceError::MalformedDocument(err.to_string()))
}

/// CSV row. The first record carries the document header (empty `date`
/// field, `holidays_per_year` and `current_year` filled in); every following
/// record is one vacation entry.
#[derive(Default, Serialize, Deserialize)]
struct VacationCsvRecord {
    date: String,
    status: String,
    #[serde(default)]
    holidays_per_year: String,
    #[serde(default)]
    current_year: String,
}

impl VacationCsvRecord {
    fn metadata_row(document: &PlanDocument) -> Self {
        let mut record = VacationCsvRecord::default();
        record.holidays_per_year = document.holidays_per_year.to_string();
        record.current_year = document.current_year.to_string();
        record
    }

    fn is_metadata_row(&self) -> bool {
        self.date.trim().is_empty()
    }
}

pub fn save_document_to_csv<P: AsRef<Path>>(
    document: &PlanDocument,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.serialize(VacationCsvRecord::metadata_row(document))?;
    for (date, status) in &document.vacation {
        writer.serialize(VacationCsvRecord {
            date: date.clone(),
            status: status.clone(),
            ..VacationCsvRecord::default()
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_document_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<PlanDocument> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut document: Option<PlanDocument> = None;
    let mut entries = Vec::new();
    for record in reader.deserialize::<VacationCsvRecord>() {
        let record = record?;
        if record.is_metadata_row() {
            if document.is_some() {
                return Err(PersistenceError::MalformedDocument(
                    "CSV file contained multiple metadata rows".into(),
                ));
            }
            let holidays_per_year = record.holidays_per_year.trim().parse::<u32>().map_err(
                |err| {
                    PersistenceError::MalformedDocument(format!(
                        "invalid holidays_per_year '{}': {err}",
                        record.holidays_per_year
                    ))
                },
            )?;
            let current_year = record.current_year.trim().parse::<i32>().map_err(|err| {
                PersistenceError::MalformedDocument(format!(
                    "invalid current_year '{}': {err}",
                    record.current_year
                ))
            })?;
            document = Some(PlanDocument::new(holidays_per_year, current_year));
            continue;
        }
        entries.push((record.date, record.status));
    }

    let mut document = document.ok_or_else(|| {
        PersistenceError::MalformedDocument("CSV file contained no metadata row".into())
    })?;
    for (date, status) in entries {
        document.vacation.insert(date, status);
    }
    Ok(document)
}
