#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps an in-memory ledger of categorized expenses, the
//! running per-category totals, and a chart projection of spending shares.
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_tracker::{engine::ExpenseSession, ledger::CategoryPalette};
//!
//! let mut session = ExpenseSession::new(CategoryPalette::default(), "Food").unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! session.submit(Some("Food"), "10.00", today).unwrap();
//! session.submit(Some("Transport"), "30.00", today).unwrap();
//!
//! let chart = session.chart();
//! assert_eq!(chart[0].label, "Food\n25.0% (10.00)");
//! assert_eq!(chart[1].label, "Transport\n75.0% (30.00)");
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod utils;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    if utils::init_tracing() {
        tracing::info!("Expense tracker tracing initialized.");
    }
}
