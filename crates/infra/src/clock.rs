// crates/infra/src/clock.rs
use chrono::{Local, NaiveDateTime, Timelike};
use corpus_scrape_ports::clock::Clock;

/// Local wall clock truncated to microseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        let micros = now.nanosecond() / 1_000 * 1_000;
        now.with_nanosecond(micros).unwrap_or(now)
    }
}
