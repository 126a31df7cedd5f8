#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Mutex;

use chrono::NaiveDate;
use expense_tracker::config::ConfigManager;
use expense_tracker::engine::ExpenseSession;
use expense_tracker::ledger::CategoryPalette;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager rooted in a fresh temporary directory.
pub fn setup_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::with_base_dir(temp.path());
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    manager
}

pub fn session() -> ExpenseSession {
    ExpenseSession::new(CategoryPalette::default(), "Food").expect("default session")
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

pub fn dec(raw: &str) -> Decimal {
    Decimal::from_str(raw).expect("decimal literal")
}
