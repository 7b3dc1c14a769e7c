use crate::configuration::Configuration;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub section: String,
    pub date: String,
    pub time: String,
}

impl Booking {
    pub fn new(section: String, date: String, time: String) -> Self {
        Self {
            section,
            date,
            time,
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section: {}, Date: {}, Time: {}",
            self.section, self.date, self.time
        )
    }
}

/// Validation settings a store is built with. Fixed for the lifetime of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRules {
    pub allowed_sections: Vec<String>,
    pub allowed_year: String,
    /// Reject windows whose start is not strictly before their end.
    pub strict_time_ranges: bool,
    /// Run the conflict scan on updates as well as on creates.
    pub check_update_conflicts: bool,
}

impl BookingRules {
    pub fn from_configuration<C: Configuration>(configuration: &C) -> Self {
        Self {
            allowed_sections: configuration.allowed_sections(),
            allowed_year: configuration.allowed_year(),
            strict_time_ranges: configuration.strict_time_ranges(),
            check_update_conflicts: configuration.check_update_conflicts(),
        }
    }

    pub fn is_valid_section(&self, section: &str) -> bool {
        self.allowed_sections.iter().any(|allowed| allowed == section)
    }

    /// Only the leading four characters are compared. Month and day are not validated.
    pub fn is_valid_year(&self, date: &str) -> bool {
        date.get(..4) == Some(self.allowed_year.as_str())
    }
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            allowed_sections: ["INF 243", "INF 244", "INF 245", "INF 246", "INF 247"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_year: "2024".into(),
            strict_time_ranges: false,
            check_update_conflicts: false,
        }
    }
}
