use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::PreconditionError;

use super::{
    category::{Category, CategoryPalette},
    record::{ExpenseRecord, RecordId},
    totals::CategoryTotals,
};

/// Authoritative in-memory store of expense records and running totals.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    palette: CategoryPalette,
    records: Vec<ExpenseRecord>,
    totals: CategoryTotals,
}

impl Ledger {
    pub fn new(palette: CategoryPalette) -> Self {
        let totals = CategoryTotals::zeroed(&palette);
        Self {
            palette,
            records: Vec::new(),
            totals,
        }
    }

    /// Appends a record and bumps its category total in one step.
    ///
    /// Callers are expected to pass validated input. A category outside the
    /// palette, a non-positive amount, or an amount that would overflow the
    /// grand total is a contract violation and leaves the ledger untouched.
    pub fn add_record(
        &mut self,
        category: &Category,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<RecordId, PreconditionError> {
        let index = self
            .palette
            .position(category)
            .ok_or_else(|| PreconditionError::UnknownCategory(category.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(PreconditionError::NonPositiveAmount(amount.to_string()));
        }
        self.totals
            .checked_sum()
            .and_then(|grand_total| grand_total.checked_add(amount))
            .ok_or_else(|| PreconditionError::TotalOverflow(category.to_string()))?;
        self.totals
            .checked_add(index, amount)
            .ok_or_else(|| PreconditionError::TotalOverflow(category.to_string()))?;

        let id = RecordId::new(self.records.len());
        self.records
            .push(ExpenseRecord::new(id, date, category.clone(), amount));
        tracing::debug!(record = %id, category = %category, %amount, "expense recorded");
        Ok(id)
    }

    /// Snapshot of the running totals.
    pub fn current_totals(&self) -> CategoryTotals {
        self.totals.clone()
    }

    /// Records in insertion order, oldest first.
    pub fn all_records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&ExpenseRecord> {
        self.records.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn grand_total(&self) -> Decimal {
        self.totals.sum()
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn new_ledger_starts_with_zeroed_totals() {
        let ledger = Ledger::new(CategoryPalette::default());
        let totals = ledger.current_totals();

        assert!(ledger.is_empty());
        assert_eq!(totals.len(), 4);
        assert!(totals.iter().all(|entry| entry.amount == Decimal::ZERO));
    }

    #[test]
    fn add_record_appends_and_accumulates() {
        let mut ledger = Ledger::new(CategoryPalette::default());
        let food = Category::new("Food");

        let first = ledger.add_record(&food, dec("12.50"), date()).unwrap();
        let second = ledger.add_record(&food, dec("7.25"), date()).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(ledger.current_totals().get(&food), Some(dec("19.75")));
        assert_eq!(ledger.record(second).map(|r| r.amount()), Some(dec("7.25")));
    }

    #[test]
    fn unknown_category_is_a_precondition_failure() {
        let mut ledger = Ledger::new(CategoryPalette::default());
        let err = ledger
            .add_record(&Category::new("Zzz"), dec("1"), date())
            .expect_err("unknown category");

        assert_eq!(err, PreconditionError::UnknownCategory("Zzz".into()));
        assert!(ledger.is_empty());
        assert_eq!(ledger.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn non_positive_amount_leaves_ledger_untouched() {
        let mut ledger = Ledger::new(CategoryPalette::default());
        let err = ledger
            .add_record(&Category::new("Food"), dec("0"), date())
            .expect_err("zero amount");

        assert!(matches!(err, PreconditionError::NonPositiveAmount(_)));
        assert!(ledger.all_records().is_empty());
    }

    #[test]
    fn overflowing_total_is_rejected_without_appending() {
        let mut ledger = Ledger::new(CategoryPalette::default());
        let food = Category::new("Food");
        ledger.add_record(&food, Decimal::MAX, date()).unwrap();

        let err = ledger
            .add_record(&food, Decimal::MAX, date())
            .expect_err("overflow");

        assert_eq!(err, PreconditionError::TotalOverflow("Food".into()));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.grand_total(), Decimal::MAX);
    }

    #[test]
    fn grand_total_overflow_across_categories_is_rejected() {
        let mut ledger = Ledger::new(CategoryPalette::default());
        ledger
            .add_record(&Category::new("Food"), Decimal::MAX, date())
            .unwrap();

        let err = ledger
            .add_record(&Category::new("Transport"), dec("1"), date())
            .expect_err("grand total overflow");

        assert_eq!(err, PreconditionError::TotalOverflow("Transport".into()));
        assert_eq!(ledger.len(), 1);
        assert_eq!(
            ledger.current_totals().get(&Category::new("Transport")),
            Some(Decimal::ZERO)
        );
        assert_eq!(ledger.current_totals().checked_sum(), Some(Decimal::MAX));
    }
}
