//! Encode/decode helpers for the expiry TEXT column.
//!
//! Writes always use the fixed-width UTC form `YYYY-MM-DDTHH:MM:SS.mmmZ`;
//! with every stored value the same width and zone, byte order on the
//! column equals chronological order, which `list_expiring_before` relies
//! on. Reads are lenient: any RFC 3339 timestamp parses and is normalized
//! to UTC.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::StoreError;

/// Encode an expiry instant into the stored text form.
pub fn encode_expiry(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Decode a stored expiry string back into an instant.
pub fn decode_expiry(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StoreError::MalformedExpiry(raw.to_string()))
}
