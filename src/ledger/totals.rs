use rust_decimal::Decimal;
use serde::Serialize;

use super::category::{Category, CategoryPalette};

/// Running sum for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Decimal,
}

/// Per-category running sums, one entry per palette category in palette order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn zeroed(palette: &CategoryPalette) -> Self {
        Self {
            entries: palette
                .categories()
                .map(|category| CategoryTotal {
                    category: category.clone(),
                    amount: Decimal::ZERO,
                })
                .collect(),
        }
    }

    pub fn get(&self, category: &Category) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| &entry.category == category)
            .map(|entry| entry.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grand total across every category.
    ///
    /// Totals built by a [`Ledger`](super::Ledger) always fit, since it
    /// refuses any record that would push the grand total past
    /// `Decimal::MAX`. Saturates otherwise.
    pub fn sum(&self) -> Decimal {
        self.checked_sum().unwrap_or(Decimal::MAX)
    }

    /// Grand total, or `None` if it is not representable.
    pub fn checked_sum(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, entry| acc.checked_add(entry.amount))
    }

    /// Adds `amount` to the entry at palette position `index`.
    ///
    /// Returns `None` without changing anything when the index is out of
    /// range or the sum would overflow.
    pub(crate) fn checked_add(&mut self, index: usize, amount: Decimal) -> Option<Decimal> {
        let entry = self.entries.get_mut(index)?;
        let next = entry.amount.checked_add(amount)?;
        entry.amount = next;
        Some(next)
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
