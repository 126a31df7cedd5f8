//! Top-level session object that owns the ledger for the lifetime of a run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    config::Config,
    currency::{format_amount, format_date},
    errors::{PreconditionError, SessionError, SubmitError, ValidationError},
    ledger::{Category, CategoryPalette, CategoryTotals, ExpenseRecord, Ledger, RecordId},
};

use super::services::{ChartProjector, ChartSection, InputValidator};

/// Result of a committed add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub id: RecordId,
    pub record: ExpenseRecord,
    pub chart: Vec<ChartSection>,
}

/// One display row of the expense table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub category: String,
    pub amount: String,
}

impl From<&ExpenseRecord> for TableRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: format_date(record.date()),
            category: record.category().to_string(),
            amount: format_amount(record.amount()),
        }
    }
}

/// Serializable view of the whole session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<'a> {
    pub selected_category: &'a Category,
    pub records: &'a [ExpenseRecord],
    pub totals: CategoryTotals,
    pub grand_total: Decimal,
    pub chart: Vec<ChartSection>,
}

/// Owns the ledger plus the currently selected category.
#[derive(Debug, Clone)]
pub struct ExpenseSession {
    ledger: Ledger,
    selected: Category,
}

impl ExpenseSession {
    pub fn new(palette: CategoryPalette, default_category: &str) -> Result<Self, SessionError> {
        let selected = palette
            .resolve(default_category)
            .cloned()
            .ok_or_else(|| SessionError::UnknownDefaultCategory(default_category.to_string()))?;
        tracing::info!(
            categories = palette.len(),
            selected = %selected,
            "expense session started"
        );
        Ok(Self {
            ledger: Ledger::new(palette),
            selected,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SessionError> {
        let palette = CategoryPalette::new(config.categories.clone())?;
        Self::new(palette, &config.default_category)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn palette(&self) -> &CategoryPalette {
        self.ledger.palette()
    }

    pub fn selected_category(&self) -> &Category {
        &self.selected
    }

    /// Changes the category used when an add attempt names none.
    pub fn select_category(&mut self, raw: &str) -> Result<&Category, ValidationError> {
        let category = InputValidator::resolve_category(self.ledger.palette(), raw)?;
        tracing::debug!(category = %category, "category selected");
        self.selected = category;
        Ok(&self.selected)
    }

    /// Runs one validate, add, project cycle.
    ///
    /// A rejected attempt leaves records and totals exactly as they were.
    pub fn submit(
        &mut self,
        category_raw: Option<&str>,
        amount_raw: &str,
        date: NaiveDate,
    ) -> Result<SubmitOutcome, SubmitError> {
        let input = InputValidator::validate(
            self.ledger.palette(),
            category_raw,
            amount_raw,
            &self.selected,
        )
        .inspect_err(|err| tracing::warn!(error = %err, "add attempt rejected"))?;

        let id = self
            .ledger
            .add_record(&input.category, input.amount, date)
            .inspect_err(|err| tracing::error!(error = %err, "ledger rejected validated input"))?;

        let record = self
            .ledger
            .record(id)
            .cloned()
            .ok_or_else(|| PreconditionError::MissingRecord(id.to_string()))?;
        Ok(SubmitOutcome {
            id,
            record,
            chart: self.chart(),
        })
    }

    /// Current chart projection.
    pub fn chart(&self) -> Vec<ChartSection> {
        ChartProjector::project(&self.ledger.current_totals(), self.ledger.palette())
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        self.ledger.all_records().iter().map(TableRow::from).collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            selected_category: &self.selected,
            records: self.ledger.all_records(),
            totals: self.ledger.current_totals(),
            grand_total: self.ledger.grand_total(),
            chart: self.chart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ExpenseSession {
        ExpenseSession::new(CategoryPalette::default(), "Food").unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    #[test]
    fn default_category_must_exist() {
        let err = ExpenseSession::new(CategoryPalette::default(), "Travel").unwrap_err();
        assert_eq!(err, SessionError::UnknownDefaultCategory("Travel".into()));
    }

    #[test]
    fn submit_without_category_uses_selection() {
        let mut session = session();
        session.select_category("transport").unwrap();

        let outcome = session.submit(None, "4.20", day()).unwrap();

        assert_eq!(outcome.record.category().as_str(), "Transport");
        assert_eq!(outcome.record.date(), day());
        assert_eq!(session.ledger().record(outcome.id), Some(&outcome.record));
        assert_eq!(outcome.chart.len(), 1);
        assert_eq!(outcome.chart[0].label, "Transport\n100.0% (4.20)");
    }

    #[test]
    fn rejected_submit_changes_nothing() {
        let mut session = session();
        session.submit(Some("Food"), "10", day()).unwrap();
        let before = session.ledger().current_totals();

        let err = session.submit(Some("Food"), "-1", day()).unwrap_err();

        assert_eq!(err, SubmitError::Rejected(ValidationError::InvalidAmount));
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().current_totals(), before);
    }

    #[test]
    fn failed_selection_keeps_previous_category() {
        let mut session = session();
        assert!(session.select_category("Gadgets").is_err());
        assert_eq!(session.selected_category().as_str(), "Food");
    }

    #[test]
    fn table_rows_round_for_display_only() {
        let mut session = session();
        session.submit(None, "0.001", day()).unwrap();

        let rows = session.table_rows();
        assert_eq!(rows[0].amount, "0.00");
        assert_eq!(rows[0].date, "2024-02-29");
        assert_eq!(session.ledger().grand_total(), Decimal::new(1, 3));
    }

    #[test]
    fn integration_errors_are_distinct_from_rejections() {
        let err = SubmitError::from(PreconditionError::UnknownCategory("Zzz".into()));
        assert!(matches!(err, SubmitError::Integration(_)));
    }
}
