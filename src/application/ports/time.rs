// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Timestamp source for `created_at`/`updated_at` columns. Tests pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
