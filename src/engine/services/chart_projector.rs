use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::{format_amount, format_percent};
use crate::ledger::{Category, CategoryPalette, CategoryTotals, ChartColor};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// One wedge of the spending chart, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSection {
    pub category: Category,
    pub color: ChartColor,
    /// Wedge weight. Equals the category total, or 1 for placeholders.
    pub raw_value: Decimal,
    /// Unrounded share of the grand total; `None` for placeholders.
    pub percent_of_total: Option<Decimal>,
    pub label: String,
}

impl ChartSection {
    /// `true` for the uniform wedges drawn while nothing has been spent.
    pub fn is_placeholder(&self) -> bool {
        self.percent_of_total.is_none()
    }
}

/// Derives chart sections from running totals.
pub struct ChartProjector;

impl ChartProjector {
    /// Projects `totals` onto palette order.
    ///
    /// With no spending every category gets an equal placeholder wedge.
    /// Otherwise only categories with a positive total appear.
    pub fn project(totals: &CategoryTotals, palette: &CategoryPalette) -> Vec<ChartSection> {
        let grand_total = totals.sum();
        if grand_total <= Decimal::ZERO {
            return palette
                .entries()
                .iter()
                .map(|entry| ChartSection {
                    category: entry.category.clone(),
                    color: entry.color,
                    raw_value: Decimal::ONE,
                    percent_of_total: None,
                    label: format!("{}\n{}", entry.category, format_amount(Decimal::ZERO)),
                })
                .collect();
        }

        palette
            .entries()
            .iter()
            .filter_map(|entry| {
                let value = totals.get(&entry.category).unwrap_or(Decimal::ZERO);
                if value <= Decimal::ZERO {
                    return None;
                }
                let percent = value / grand_total * ONE_HUNDRED;
                Some(ChartSection {
                    category: entry.category.clone(),
                    color: entry.color,
                    raw_value: value,
                    percent_of_total: Some(percent),
                    label: format!(
                        "{}\n{}% ({})",
                        entry.category,
                        format_percent(percent),
                        format_amount(value)
                    ),
                })
            })
            .collect()
    }
}
