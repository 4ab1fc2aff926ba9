use serde::{Deserialize, Serialize};

/// Per-day vacation status. The derived order (`Unplanned < Planned <
/// Requested < Approved`) drives the "count at least" aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unplanned,
    Planned,
    Requested,
    Approved,
}

impl Status {
    /// Cyclic successor used when clicking a day: Unplanned -> Planned ->
    /// Requested -> Approved -> Unplanned.
    pub fn next(self) -> Self {
        match self {
            Status::Unplanned => Status::Planned,
            Status::Planned => Status::Requested,
            Status::Requested => Status::Approved,
            Status::Approved => Status::Unplanned,
        }
    }

    /// Persisted string form. `Unplanned` maps to the empty string and is
    /// never written to a document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unplanned => "",
            Status::Planned => "planned",
            Status::Requested => "requested",
            Status::Approved => "approved",
        }
    }

    pub fn from_str(input: &str) -> Option<Self> {
        match input {
            "" => Some(Status::Unplanned),
            "planned" => Some(Status::Planned),
            "requested" => Some(Status::Requested),
            "approved" => Some(Status::Approved),
            _ => None,
        }
    }
}
