use crate::clock::{Clock, SystemClock};
use crate::error::{ResolveError, Result};
use crate::placeholder::token::{Placeholder, Token};
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Output format for resolved dates. Calendar dates only, no timezone.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves placeholder tokens against an injected clock
pub struct PlaceholderResolver<C: Clock = SystemClock> {
    clock: C,
}

impl PlaceholderResolver<SystemClock> {
    /// Create a resolver backed by the system clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for PlaceholderResolver<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PlaceholderResolver<C> {
    /// Create a resolver with a custom clock (a [`crate::FixedClock`] in tests)
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Resolve a token against the clock's "today".
    ///
    /// `reference` is the base date for the relative-offset placeholders,
    /// typically a previously resolved check-in date. When `None`, relative
    /// offsets fall back to today.
    pub fn resolve(&self, token: &str, reference: Option<NaiveDate>) -> Result<String> {
        resolve_on(token, reference, self.clock.today())
    }
}

/// Resolve a token as a pure function of (token, reference, today).
///
/// Literal values (no angle brackets) pass through unchanged; placeholders
/// render as `yyyy-MM-dd`.
pub fn resolve_on(
    token: &str,
    reference: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<String> {
    match Token::parse(token)? {
        Token::Literal(value) => {
            log::debug!("passing through literal date value '{}'", value);
            Ok(value)
        }
        Token::Placeholder(placeholder) => {
            let resolved = resolve_placeholder(placeholder, reference, today, token)?;
            log::debug!(
                "resolved '{}' to {} (today={}, reference={:?})",
                token,
                resolved,
                today,
                reference
            );
            Ok(resolved.format(DATE_FORMAT).to_string())
        }
    }
}

fn resolve_placeholder(
    placeholder: Placeholder,
    reference: Option<NaiveDate>,
    today: NaiveDate,
    token: &str,
) -> Result<NaiveDate> {
    // Relative offsets operate on the reference date when one is supplied;
    // everything else is anchored to today
    let base = reference.unwrap_or(today);

    match placeholder {
        Placeholder::Today => Ok(today),
        Placeholder::Tomorrow => shift_days(today, 1, token),
        Placeholder::Yesterday => shift_days(today, -1, token),
        Placeholder::NextWeek => shift_days(today, 7, token),
        Placeholder::NextMonth => shift_months(today, 1, token),
        Placeholder::FirstDayOfMonth => first_day_of_month(today, token),
        Placeholder::LastDayOfMonth => last_day_of_month(today, token),
        Placeholder::FirstDayOfNextMonth => {
            first_day_of_month(shift_months(today, 1, token)?, token)
        }
        Placeholder::LastDayOfNextMonth => {
            last_day_of_month(shift_months(today, 1, token)?, token)
        }
        Placeholder::NextWeekday(weekday) => next_weekday_buffered(today, weekday, token),
        Placeholder::PlusDays(n) => shift_days(base, i64::from(n), token),
        Placeholder::MinusDays(n) => shift_days(base, -i64::from(n), token),
        Placeholder::PlusWeeks(n) => shift_days(base, 7 * i64::from(n), token),
        Placeholder::PlusMonths(n) => shift_months(base, n, token),
        Placeholder::NextFromCheckIn(n) => {
            let check_in = reference.ok_or_else(|| ResolveError::MissingReferenceDate {
                token: token.to_string(),
            })?;
            shift_days(check_in, i64::from(n), token)
        }
    }
}

/// Next-or-same occurrence of the target weekday, searched from one week out.
///
/// The one-week buffer guarantees the result is strictly in the future and
/// never a same-week date the booking site's picker would reject. Resolved on
/// the target weekday itself, this lands exactly seven days ahead; the
/// furthest case is thirteen.
fn next_weekday_buffered(today: NaiveDate, target: Weekday, token: &str) -> Result<NaiveDate> {
    let candidate = shift_days(today, 7, token)?;

    let ahead = (i64::from(target.num_days_from_monday())
        - i64::from(candidate.weekday().num_days_from_monday()))
    .rem_euclid(7);

    shift_days(candidate, ahead, token)
}

fn shift_days(base: NaiveDate, days: i64, token: &str) -> Result<NaiveDate> {
    base.checked_add_signed(Duration::days(days))
        .ok_or_else(|| out_of_range(token))
}

/// Calendar-month shift with day-of-month clamped to the target month's last
/// valid day (Jan 31 + 1 month = Feb 28/29)
fn shift_months(base: NaiveDate, months: u32, token: &str) -> Result<NaiveDate> {
    base.checked_add_months(Months::new(months))
        .ok_or_else(|| out_of_range(token))
}

fn first_day_of_month(date: NaiveDate, token: &str) -> Result<NaiveDate> {
    date.with_day(1).ok_or_else(|| out_of_range(token))
}

fn last_day_of_month(date: NaiveDate, token: &str) -> Result<NaiveDate> {
    let next_month = shift_months(first_day_of_month(date, token)?, 1, token)?;
    shift_days(next_month, -1, token)
}

fn out_of_range(token: &str) -> ResolveError {
    ResolveError::DateOutOfRange {
        token: token.to_string(),
    }
}
