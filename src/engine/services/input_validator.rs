use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use strsim::levenshtein;

use crate::errors::ValidationError;
use crate::ledger::{Category, CategoryPalette};

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A (category, amount) pair that is safe to commit to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedInput {
    pub category: Category,
    pub amount: Decimal,
}

/// Gate between raw form input and ledger mutation.
pub struct InputValidator;

impl InputValidator {
    /// Checks a raw add attempt.
    ///
    /// A missing or blank category falls back to `default_category`. The
    /// category is checked before the amount.
    pub fn validate(
        palette: &CategoryPalette,
        category_raw: Option<&str>,
        amount_raw: &str,
        default_category: &Category,
    ) -> Result<ValidatedInput, ValidationError> {
        let category = match category_raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::resolve_category(palette, raw)?,
            _ => Self::resolve_category(palette, default_category.as_str())?,
        };
        let amount = Self::parse_amount(amount_raw)?;
        Ok(ValidatedInput { category, amount })
    }

    /// Maps raw text onto the canonical palette category.
    pub fn resolve_category(
        palette: &CategoryPalette,
        raw: &str,
    ) -> Result<Category, ValidationError> {
        palette
            .resolve(raw)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownCategory(raw.trim().to_string()))
    }

    /// Parses a strictly positive decimal, plain or in scientific notation.
    ///
    /// Amounts finer than 28 fractional digits round to zero on parse and
    /// are rejected like any other non-positive amount.
    pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
        let trimmed = raw.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| ValidationError::InvalidAmount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(amount.normalize())
    }

    /// Closest palette category by edit distance, for "did you mean" hints.
    pub fn suggest<'a>(palette: &'a CategoryPalette, raw: &str) -> Option<&'a Category> {
        let needle = raw.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        palette
            .categories()
            .map(|category| {
                let distance = levenshtein(&needle, &category.as_str().to_ascii_lowercase());
                (distance, category)
            })
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, category)| category)
    }
}
