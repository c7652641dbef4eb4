//! Timestamps attached to sent commands and refreshes.

use chrono::{DateTime, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
