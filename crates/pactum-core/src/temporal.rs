//! # Temporal Types
//!
//! UTC-only timestamp type. Release deadlines, consent changes, and
//! settlement records all carry UTC timestamps; local time conversion is a
//! presentation concern outside this workspace.
//!
//! ## Design Decision
//!
//! Timestamps are totally ordered so deadline gates (`now >= release_time`)
//! are plain comparisons. Nothing in the core crates reads the system
//! clock; callers construct `Timestamp::now()` at the transaction boundary
//! and pass it inward via [`CallContext`](crate::CallContext).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp.
///
/// Serializes to ISO 8601 with a `Z` suffix (e.g., `2026-08-06T12:00:00Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// This timestamp shifted forward by a whole number of days.
    ///
    /// Saturates at the representable range boundary rather than panicking.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(
            self.0
                .checked_add_signed(Duration::days(days))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }

    /// This timestamp shifted forward by a whole number of seconds.
    ///
    /// Saturates at the representable range boundary rather than panicking.
    pub fn plus_seconds(&self, seconds: i64) -> Self {
        Self(
            self.0
                .checked_add_signed(Duration::seconds(seconds))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
