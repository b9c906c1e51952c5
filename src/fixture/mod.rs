//! Test-data loading for booking scenarios
//!
//! This module is the consumer side of the placeholder engine: it reads
//! JSON fixture files, substitutes the date placeholders in each record,
//! and hands fully concrete rows to the test suites. It includes:
//! - BookingRecord: one scenario row, date fields as strings
//! - TestDataLoader: parsing plus the check-in/check-out resolution chain

pub mod loader;
pub mod record;

pub use loader::TestDataLoader;
pub use record::BookingRecord;
