//! # booking-testdata
//!
//! A Rust library for resolving symbolic date placeholders in browser test fixtures,
//! built for UI test suites that book travel dates relative to "today".
//!
//! ## Features
//!
//! - **Placeholder Resolution**: Turn tokens like `<NEXT_FRIDAY>` or `<PLUS_3_DAYS>` into concrete `yyyy-MM-dd` dates
//! - **Injectable Clock**: Swap the system clock for a fixed date to get deterministic test data
//! - **Fixture Loading**: Load JSON booking records and resolve check-in/check-out pairs with reference chaining
//! - **Literal Passthrough**: Hardcoded dates coexist with placeholders in the same fixture
//!
//! ## Placeholder Resolution
//!
//! ```rust
//! use booking_testdata::{FixedClock, PlaceholderResolver};
//! use chrono::NaiveDate;
//!
//! # fn main() -> booking_testdata::Result<()> {
//! // Pin "today" to Friday 2025-09-19
//! let today = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();
//! let resolver = PlaceholderResolver::with_clock(FixedClock::new(today));
//!
//! // NEXT_<WEEKDAY> applies a one-week buffer: never today, never this week
//! assert_eq!(resolver.resolve("<NEXT_FRIDAY>", None)?, "2025-09-26");
//!
//! // Relative offsets resolve against a reference date when one is supplied
//! let check_in = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap();
//! assert_eq!(resolver.resolve("<PLUS_3_DAYS>", Some(check_in))?, "2025-09-29");
//! # Ok(())
//! # }
//! ```
//!
//! ## Fixture Loading
//!
//! Booking fixtures resolve the check-in field first, then the check-out field
//! with the resolved check-in as its reference date:
//!
//! ```rust
//! use booking_testdata::{FixedClock, TestDataLoader};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), booking_testdata::FixtureError> {
//! let today = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();
//! let loader = TestDataLoader::with_clock(FixedClock::new(today));
//!
//! let records = loader.load_str(r#"[
//!     {"destination": "Lisbon", "checkInDate": "<NEXT_FRIDAY>", "checkOutDate": "<PLUS_3_DAYS>"}
//! ]"#)?;
//!
//! assert_eq!(records[0].check_in_date, "2025-09-26");
//! assert_eq!(records[0].check_out_date, "2025-09-29");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Unknown tokens are a hard error, never silently passed through: a bad
//! placeholder means the test scenario cannot run meaningfully. The error
//! message carries the full supported-placeholder list for log output.
//!
//! ## Module Overview
//!
//! - [`placeholder`]: Token grammar and the resolution engine
//! - [`fixture`]: JSON fixture loading with check-in/check-out chaining
//! - [`clock`]: Injectable "today" provider
//! - [`error`]: Error types and result alias

pub mod clock;
pub mod error;
pub mod fixture;
pub mod placeholder;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{FixtureError, ResolveError, Result};
pub use fixture::{BookingRecord, TestDataLoader};
pub use placeholder::{
    resolve_on, supported_list, Placeholder, PlaceholderResolver, Token, DATE_FORMAT,
    SUPPORTED_PLACEHOLDERS,
};
