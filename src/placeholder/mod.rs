//! Date-placeholder grammar and resolution
//!
//! This module turns symbolic date tokens from test fixtures into concrete
//! calendar dates. It includes:
//! - Token: classification of raw fixture values (literal vs placeholder)
//! - Placeholder: the closed set of recognized placeholder forms
//! - PlaceholderResolver: resolution against an injectable clock

pub mod resolver;
pub mod token;

pub use resolver::{resolve_on, DATE_FORMAT, PlaceholderResolver};
pub use token::{supported_list, Placeholder, Token, SUPPORTED_PLACEHOLDERS};
