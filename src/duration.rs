//! Duration-to-phrase breakdown
//!
//! Decomposes a duration into calendar and clock units, coarsest first, and
//! renders each nonzero unit as a quantity phrase. The breakdown stops at
//! the requested precision; durations shorter than one unit of that
//! precision collapse into a single fractional term ("less than one week").

use std::time::Duration;

use crate::error::FormatError;
use crate::quantity::format_quantity;
use crate::unit::TimeUnit;

// Approximate calendar constants used by the breakdown.
const DAYS_PER_YEAR: u64 = 365;
const DAYS_PER_MONTH: u64 = 30;
const DAYS_PER_WEEK: u64 = 7;

/// Format a duration as a natural-language phrase
///
/// Breaks the duration down greedily from years to seconds using 365-day
/// years, 30-day months, and 7-day weeks, stopping at `precision`. Nonzero
/// terms are joined with `", "` and the final pair with `" and "`
/// ("1 year, 2 months and 3 days"); zero-valued units contribute no term.
///
/// When the whole duration is shorter than one unit of the requested
/// precision, a single fractional term is returned instead of a breakdown,
/// which reads as `"less than one <unit>"` with `as_words` set.
///
/// # Errors
///
/// Returns [`FormatError::ZeroDuration`] for a zero-length duration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use humantext::{format_duration, TimeUnit};
///
/// let phrase = format_duration(Duration::from_secs(57), TimeUnit::Second, false).unwrap();
/// assert_eq!(phrase, "57 seconds");
///
/// let day = 24 * 60 * 60;
/// let phrase =
///     format_duration(Duration::from_secs(428 * day), TimeUnit::Day, false).unwrap();
/// assert_eq!(phrase, "1 year, 2 months and 3 days");
///
/// let phrase = format_duration(Duration::from_secs(1800), TimeUnit::Hour, true).unwrap();
/// assert_eq!(phrase, "less than one hour");
/// ```
pub fn format_duration(
    duration: Duration,
    precision: TimeUnit,
    as_words: bool,
) -> Result<String, FormatError> {
    if duration.is_zero() {
        return Err(FormatError::ZeroDuration);
    }

    let total_seconds = duration.as_secs_f64();
    let total_minutes = total_seconds / 60.0;
    let total_hours = total_minutes / 60.0;
    let total_days = total_hours / 24.0;
    let rank = precision.rank();

    // Whole-unit decomposition, coarsest first. Each finer calendar unit is
    // carved out of the remainder left by the coarser ones.
    let whole_days = total_days as u64;
    let years = whole_days / DAYS_PER_YEAR;
    let months = whole_days % DAYS_PER_YEAR / DAYS_PER_MONTH;
    let weeks = whole_days % DAYS_PER_YEAR % DAYS_PER_MONTH / DAYS_PER_WEEK;
    let days = whole_days % DAYS_PER_YEAR % DAYS_PER_MONTH % DAYS_PER_WEEK;

    let mut terms = Vec::new();

    if total_days >= DAYS_PER_YEAR as f64 {
        push_term(&mut terms, years, TimeUnit::Year, as_words);
    } else if rank == TimeUnit::Year.rank() {
        return Ok(fractional_term(total_days / DAYS_PER_YEAR as f64, TimeUnit::Year, as_words));
    }

    if rank >= TimeUnit::Month.rank() {
        if total_days >= DAYS_PER_MONTH as f64 {
            push_term(&mut terms, months, TimeUnit::Month, as_words);
        } else if rank == TimeUnit::Month.rank() {
            return Ok(fractional_term(
                total_days / DAYS_PER_MONTH as f64,
                TimeUnit::Month,
                as_words,
            ));
        }
    }

    if rank >= TimeUnit::Week.rank() {
        if total_days >= DAYS_PER_WEEK as f64 {
            push_term(&mut terms, weeks, TimeUnit::Week, as_words);
        } else if rank == TimeUnit::Week.rank() {
            return Ok(fractional_term(total_days / DAYS_PER_WEEK as f64, TimeUnit::Week, as_words));
        }
    }

    if rank >= TimeUnit::Day.rank() {
        if total_days >= 1.0 {
            push_term(&mut terms, days, TimeUnit::Day, as_words);
        } else if rank == TimeUnit::Day.rank() {
            return Ok(fractional_term(total_days, TimeUnit::Day, as_words));
        }
    }

    if rank >= TimeUnit::Hour.rank() {
        if total_hours >= 1.0 {
            push_term(&mut terms, total_hours as u64 % 24, TimeUnit::Hour, as_words);
        } else if rank == TimeUnit::Hour.rank() {
            return Ok(fractional_term(total_hours, TimeUnit::Hour, as_words));
        }
    }

    if rank >= TimeUnit::Minute.rank() {
        if total_minutes >= 1.0 {
            push_term(&mut terms, total_minutes as u64 % 60, TimeUnit::Minute, as_words);
        } else if rank == TimeUnit::Minute.rank() {
            return Ok(fractional_term(total_minutes, TimeUnit::Minute, as_words));
        }
    }

    if rank >= TimeUnit::Second.rank() {
        if total_seconds >= 1.0 {
            push_term(&mut terms, total_seconds as u64 % 60, TimeUnit::Second, as_words);
        } else {
            return Ok(fractional_term(total_seconds, TimeUnit::Second, as_words));
        }
    }

    Ok(join_terms(&terms))
}

/// Append a quantity phrase for a whole-unit value, skipping zeros.
fn push_term(terms: &mut Vec<String>, value: u64, unit: TimeUnit, as_words: bool) {
    if value > 0 {
        terms.push(format_quantity(value as f64, unit.noun(), as_words));
    }
}

/// A single fractional phrase for a duration below one unit of the
/// requested precision.
fn fractional_term(value: f64, unit: TimeUnit, as_words: bool) -> String {
    format_quantity(value, unit.noun(), as_words)
}

/// Join terms with `", "`, using `" and "` before the final term.
fn join_terms(terms: &[String]) -> String {
    let mut phrase = terms.join(", ");
    if let Some(idx) = phrase.rfind(", ") {
        phrase.replace_range(idx..idx + 2, " and ");
    }
    phrase
}
