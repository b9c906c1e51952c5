use crate::error::{ResolveError, Result};
use chrono::Weekday;
use regex::Regex;
use std::sync::OnceLock;

/// Supported placeholder names, in the order they are listed in diagnostics.
/// `N` stands for a positive integer captured from the token.
pub const SUPPORTED_PLACEHOLDERS: &[&str] = &[
    "<TODAY>",
    "<TOMORROW>",
    "<YESTERDAY>",
    "<NEXT_MONDAY>",
    "<NEXT_TUESDAY>",
    "<NEXT_WEDNESDAY>",
    "<NEXT_THURSDAY>",
    "<NEXT_FRIDAY>",
    "<NEXT_SATURDAY>",
    "<NEXT_SUNDAY>",
    "<NEXT_WEEK>",
    "<NEXT_MONTH>",
    "<FIRST_DAY_OF_MONTH>",
    "<LAST_DAY_OF_MONTH>",
    "<FIRST_DAY_OF_NEXT_MONTH>",
    "<LAST_DAY_OF_NEXT_MONTH>",
    "<PLUS_N_DAYS>",
    "<MINUS_N_DAYS>",
    "<PLUS_N_WEEKS>",
    "<PLUS_N_MONTHS>",
    "<NEXT_FROM_CHECK_IN_DATE_N_DAY>",
];

/// The supported-placeholder list as a single line, for error payloads
pub fn supported_list() -> String {
    SUPPORTED_PLACEHOLDERS.join(", ")
}

/// Regex patterns for the parameterized placeholder forms
fn patterns() -> &'static TokenPatterns {
    static PATTERNS: OnceLock<TokenPatterns> = OnceLock::new();
    PATTERNS.get_or_init(TokenPatterns::new)
}

struct TokenPatterns {
    plus_days: Regex,
    minus_days: Regex,
    plus_weeks: Regex,
    plus_months: Regex,
    next_from_check_in: Regex,
}

impl TokenPatterns {
    fn new() -> Self {
        Self {
            plus_days: Regex::new(r"^PLUS_(\d+)_DAYS$").unwrap(),
            minus_days: Regex::new(r"^MINUS_(\d+)_DAYS$").unwrap(),
            plus_weeks: Regex::new(r"^PLUS_(\d+)_WEEKS$").unwrap(),
            plus_months: Regex::new(r"^PLUS_(\d+)_MONTHS$").unwrap(),
            next_from_check_in: Regex::new(r"^NEXT_FROM_CHECK_IN_DATE_(\d+)_DAY$").unwrap(),
        }
    }
}

/// A parsed date placeholder with its captured parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Today,
    Tomorrow,
    Yesterday,
    /// Seven days from today
    NextWeek,
    /// One calendar month from today, day-of-month clamped
    NextMonth,
    FirstDayOfMonth,
    LastDayOfMonth,
    FirstDayOfNextMonth,
    LastDayOfNextMonth,
    /// Next occurrence of the weekday, searched from one week out.
    /// The buffer is intentional: same-week selections are rejected by the
    /// booking site's date picker, so "next Friday" on a Friday means seven
    /// days ahead, never today.
    NextWeekday(Weekday),
    /// N days after the reference date (or today when none is supplied)
    PlusDays(u32),
    /// N days before the reference date (or today)
    MinusDays(u32),
    PlusWeeks(u32),
    PlusMonths(u32),
    /// Legacy compound form: N days after the check-in date.
    /// Unlike the PLUS family, the reference date is mandatory here.
    NextFromCheckIn(u32),
}

impl Placeholder {
    /// Parse a bracket-stripped, uppercased placeholder name.
    ///
    /// Returns `None` when the name matches no grammar, including malformed
    /// numeric captures (digits that do not fit in a u32).
    fn parse_name(name: &str) -> Option<Self> {
        // Exact names first: NEXT_WEEK and NEXT_MONTH must win over the
        // NEXT_<WEEKDAY> prefix match
        let exact = match name {
            "TODAY" => Some(Self::Today),
            "TOMORROW" => Some(Self::Tomorrow),
            "YESTERDAY" => Some(Self::Yesterday),
            "NEXT_WEEK" => Some(Self::NextWeek),
            "NEXT_MONTH" => Some(Self::NextMonth),
            "FIRST_DAY_OF_MONTH" => Some(Self::FirstDayOfMonth),
            "LAST_DAY_OF_MONTH" => Some(Self::LastDayOfMonth),
            "FIRST_DAY_OF_NEXT_MONTH" => Some(Self::FirstDayOfNextMonth),
            "LAST_DAY_OF_NEXT_MONTH" => Some(Self::LastDayOfNextMonth),
            _ => None,
        };

        if exact.is_some() {
            return exact;
        }

        if let Some(day) = name.strip_prefix("NEXT_") {
            if let Some(weekday) = parse_weekday_name(day) {
                return Some(Self::NextWeekday(weekday));
            }
        }

        let patterns = patterns();

        if let Some(caps) = patterns.plus_days.captures(name) {
            return caps[1].parse().ok().map(Self::PlusDays);
        }

        if let Some(caps) = patterns.minus_days.captures(name) {
            return caps[1].parse().ok().map(Self::MinusDays);
        }

        if let Some(caps) = patterns.plus_weeks.captures(name) {
            return caps[1].parse().ok().map(Self::PlusWeeks);
        }

        if let Some(caps) = patterns.plus_months.captures(name) {
            return caps[1].parse().ok().map(Self::PlusMonths);
        }

        if let Some(caps) = patterns.next_from_check_in.captures(name) {
            return caps[1].parse().ok().map(Self::NextFromCheckIn);
        }

        None
    }

    /// Whether this placeholder cannot be resolved without a reference date
    pub fn requires_reference(&self) -> bool {
        matches!(self, Self::NextFromCheckIn(_))
    }
}

fn parse_weekday_name(name: &str) -> Option<Weekday> {
    match name {
        "MONDAY" => Some(Weekday::Mon),
        "TUESDAY" => Some(Weekday::Tue),
        "WEDNESDAY" => Some(Weekday::Wed),
        "THURSDAY" => Some(Weekday::Thu),
        "FRIDAY" => Some(Weekday::Fri),
        "SATURDAY" => Some(Weekday::Sat),
        "SUNDAY" => Some(Weekday::Sun),
        _ => None,
    }
}

/// A raw fixture value, classified as either a literal date or a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Not wrapped in angle brackets: passed through unchanged. This is the
    /// backward-compatibility escape hatch for hardcoded dates in fixtures.
    Literal(String),

    /// A recognized placeholder
    Placeholder(Placeholder),
}

impl Token {
    /// Classify a raw fixture value.
    ///
    /// Anything not wrapped in `<` and `>` is a literal. Bracketed names are
    /// uppercased before matching, so `<next_friday>` parses the same as
    /// `<NEXT_FRIDAY>`. A bracketed name that matches no grammar is an error
    /// carrying the full supported list.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        let Some(name) = trimmed
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        else {
            return Ok(Self::Literal(raw.to_string()));
        };

        let name = name.to_uppercase();

        match Placeholder::parse_name(&name) {
            Some(placeholder) => Ok(Self::Placeholder(placeholder)),
            None => Err(ResolveError::UnsupportedPlaceholder {
                token: raw.to_string(),
                supported: supported_list(),
            }),
        }
    }
}
