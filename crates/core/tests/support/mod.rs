//! Shared test helpers for `profilegate-core` integration tests.
//!
//! These helpers provide an in-memory repository that records every call and
//! a fixed clock, so service tests can assert on side effects directly.

#![allow(dead_code)]

pub mod repositories;

use chrono::{DateTime, Duration, TimeZone, Utc};
use profilegate_core::Clock;
use profilegate_domain::Identity;

/// Clock frozen at a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A viewed timestamp far enough in the past to tell apart from "now".
pub fn two_days_ago() -> DateTime<Utc> {
    Utc::now() - Duration::hours(48)
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).single().unwrap_or_else(Utc::now)
}

/// Regular identity last viewed two days ago.
pub fn regular(id: i64, name: &str, phone: &str) -> Identity {
    Identity::new(id, name, phone).with_last_viewed_at(two_days_ago())
}

/// Admin identity last viewed two days ago.
pub fn admin(id: i64, name: &str, phone: &str) -> Identity {
    regular(id, name, phone).with_admin(true)
}
