use crate::clock::{Clock, SystemClock};
use crate::error::FixtureError;
use crate::fixture::record::BookingRecord;
use crate::placeholder::{PlaceholderResolver, DATE_FORMAT};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads JSON booking fixtures and substitutes date placeholders.
///
/// Each record is resolved in two steps whose order is a hard contract:
/// the check-in field first with no reference date, then the check-out
/// field with the just-resolved check-in date as its reference. This is
/// what lets a fixture express check-out as "<PLUS_3_DAYS>" after a
/// symbolic check-in.
pub struct TestDataLoader<C: Clock = SystemClock> {
    resolver: PlaceholderResolver<C>,
}

impl TestDataLoader<SystemClock> {
    /// Create a loader backed by the system clock
    pub fn new() -> Self {
        Self {
            resolver: PlaceholderResolver::new(),
        }
    }
}

impl Default for TestDataLoader<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TestDataLoader<C> {
    /// Create a loader with a custom clock for reproducible test data
    pub fn with_clock(clock: C) -> Self {
        Self {
            resolver: PlaceholderResolver::with_clock(clock),
        }
    }

    /// Parse a fixture JSON string (a top-level array of booking records)
    /// and resolve every record
    pub fn load_str(&self, json: &str) -> Result<Vec<BookingRecord>, FixtureError> {
        let records: Vec<BookingRecord> = serde_json::from_str(json)?;
        self.resolve_all(records)
    }

    /// Read and resolve a fixture from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<BookingRecord>, FixtureError> {
        let records: Vec<BookingRecord> = serde_json::from_reader(reader)?;
        self.resolve_all(records)
    }

    /// Read and resolve a fixture file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<BookingRecord>, FixtureError> {
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    fn resolve_all(
        &self,
        mut records: Vec<BookingRecord>,
    ) -> Result<Vec<BookingRecord>, FixtureError> {
        for record in &mut records {
            self.resolve_record(record)?;
        }
        Ok(records)
    }

    /// Substitute the date placeholders of a single record in place.
    ///
    /// The resolved check-in value must itself parse as `yyyy-MM-dd` so it
    /// can serve as the check-out reference; anything else aborts the load
    /// rather than silently resolving check-out against today.
    pub fn resolve_record(&self, record: &mut BookingRecord) -> Result<(), FixtureError> {
        let check_in = self
            .resolver
            .resolve(&record.check_in_date, None)
            .map_err(|source| FixtureError::Resolve {
                field: "checkInDate".to_string(),
                source,
            })?;

        let reference = NaiveDate::parse_from_str(&check_in, DATE_FORMAT).map_err(|_| {
            FixtureError::InvalidDate {
                field: "checkInDate".to_string(),
                value: check_in.clone(),
            }
        })?;

        let check_out = self
            .resolver
            .resolve(&record.check_out_date, Some(reference))
            .map_err(|source| FixtureError::Resolve {
                field: "checkOutDate".to_string(),
                source,
            })?;

        log::debug!(
            "resolved booking dates: '{}' -> {}, '{}' -> {}",
            record.check_in_date,
            check_in,
            record.check_out_date,
            check_out
        );

        record.check_in_date = check_in;
        record.check_out_date = check_out;

        Ok(())
    }
}
