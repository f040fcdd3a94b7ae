// crates/ports/src/clock.rs
use chrono::NaiveDateTime;

/// Source of the local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
