//! Timestamp normalization
//!
//! Source logs mix three timestamp spellings: raw Unix epoch seconds,
//! `YYYY-MM-DD HH:MM:SS` and the two-digit-year `YY-MM-DD HH:MM:SS`. All are
//! normalized to a naive instant with one-second resolution; no timezone
//! handling.

use chrono::{DateTime, NaiveDateTime};

use super::ReadError;

/// Parse a raw timestamp field, with or without surrounding square brackets
///
/// Resolution order: epoch seconds, then the four-digit-year format, then the
/// two-digit-year format. Anything else is a `TimestampFormat` error, which
/// the readers treat as a parse failure for the whole line.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ReadError> {
    let text = raw.trim().trim_matches(|c| c == '[' || c == ']');

    if let Ok(epoch) = text.parse::<i64>() {
        return DateTime::from_timestamp(epoch, 0)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| ReadError::TimestampFormat(raw.to_string()));
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%y-%m-%d %H:%M:%S"))
        .map_err(|_| ReadError::TimestampFormat(raw.to_string()))
}
