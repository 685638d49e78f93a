//! # Clock
//!
//! The service reads "today" through this trait so tests can pin the date.

use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Source of the current calendar date.
pub trait Clock: Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
