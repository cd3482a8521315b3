//! Store Info Record

use serde::{Deserialize, Serialize};

/// Restaurant contact block (singleton)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
}

/// One line of the opening-hours table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Day range, e.g. "Monday–Saturday"
    pub days: String,
    /// Display hours, e.g. "5:00 PM – 11:00 PM"
    pub open: String,
}

impl OpeningHours {
    pub fn new(days: &str, open: &str) -> Self {
        Self {
            days: days.to_string(),
            open: open.to_string(),
        }
    }
}
