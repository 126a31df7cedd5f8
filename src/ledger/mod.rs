//! Ledger domain: categories, immutable records, and running totals.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod totals;

pub use category::{Category, CategoryPalette, ChartColor, PaletteEntry};
pub use ledger::Ledger;
pub use record::{ExpenseRecord, RecordId};
pub use totals::{CategoryTotal, CategoryTotals};
