/*!
 * Canonical day strings.
 *
 * Days are stored and joined as ISO `YYYY-MM-DD` strings, which sort the
 * same way as the dates they name.
 */

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::errors::CollectorError;

/// Format used for every stored day
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Canonical string for a calendar date
pub fn canonical_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Today's canonical day in local time
pub fn today() -> String {
    canonical_day(Local::now().date_naive())
}

/// Validate a day string, returning it unchanged when canonical
///
/// Strings that parse but are not in canonical form (`2024-5-1`) are
/// rejected so that equality joins between the stores stay exact.
pub fn parse_day(value: &str) -> Result<String> {
    let canonical = NaiveDate::parse_from_str(value, DAY_FORMAT)
        .ok()
        .map(canonical_day)
        .filter(|canonical| canonical == value);

    canonical.ok_or_else(|| CollectorError::InvalidDate(value.to_string()).into())
}
