use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;

/// Stable handle for a record: its zero-based insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(usize);

impl RecordId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// A single committed expense. Only the ledger constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    id: RecordId,
    date: NaiveDate,
    category: Category,
    amount: Decimal,
}

impl ExpenseRecord {
    pub(crate) fn new(id: RecordId, date: NaiveDate, category: Category, amount: Decimal) -> Self {
        Self {
            id,
            date,
            category,
            amount,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Exact amount as entered; display rounding happens elsewhere.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
