use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single booking scenario row from a JSON fixture file.
///
/// Date fields hold either a literal `yyyy-MM-dd` value or a placeholder
/// token; after resolution they always hold concrete dates. Field names
/// match the fixture JSON (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Destination city or property search term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Check-in date, resolved first with no reference
    pub check_in_date: String,

    /// Check-out date, resolved against the resolved check-in date
    pub check_out_date: String,

    /// Number of guests for the booking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,

    /// Remaining scenario fields, preserved in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl BookingRecord {
    /// Create a record with just the two date fields set
    pub fn new(check_in_date: impl Into<String>, check_out_date: impl Into<String>) -> Self {
        Self {
            destination: None,
            check_in_date: check_in_date.into(),
            check_out_date: check_out_date.into(),
            guests: None,
            extra: IndexMap::new(),
        }
    }

    /// Builder method: set the destination
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Builder method: set the guest count
    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = Some(guests);
        self
    }
}
