use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so the ledger never reads time itself.
pub trait Clock: Send + Sync {
    /// Returns the calendar date new records are stamped with.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the system's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date, used by scripted sessions and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
