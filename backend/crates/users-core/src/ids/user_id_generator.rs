//! Server-side user id assignment.
//!
//! Ids are the creation time as decimal nanoseconds since the Unix epoch.
//! A raw clock reading is not unique under concurrent creates (or on hosts
//! with a coarse clock), so the generator keeps a high-water mark and never
//! issues the same value twice within one process.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use error_location::ErrorLocation;

#[derive(Debug, Default)]
pub struct UserIdGenerator {
    last: AtomicU64,
}

impl UserIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, e.g. `"1760781234567890123"`.
    pub fn next_id(&self) -> CoreErrorResult<String> {
        let now = Self::now_nanos()?;
        Ok(self.issue(now).to_string())
    }

    /// Issue `now`, or last + 1 if the clock has not moved past the last id.
    pub(crate) fn issue(&self, now: u64) -> u64 {
        let advance = |last: u64| now.max(last + 1);

        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(advance(last))
            }) {
            Ok(previous) | Err(previous) => advance(previous),
        }
    }

    fn now_nanos() -> CoreErrorResult<u64> {
        let nanos = Utc::now()
            .timestamp_nanos_opt()
            .ok_or_else(|| CoreError::Clock {
                message: "current time is outside the nanosecond timestamp range".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        u64::try_from(nanos).map_err(|_| CoreError::Clock {
            message: format!("system clock is before the Unix epoch ({} ns)", nanos),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
