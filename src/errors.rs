use std::io;

use thiserror::Error;

/// Fixed user-facing message for any rejected amount.
pub const INVALID_AMOUNT_MESSAGE: &str = "Enter a positive number.";

/// Rejections produced while checking raw form input.
///
/// Both variants are recoverable: the attempt is dropped and the session
/// carries on unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown category `{0}`")]
    UnknownCategory(String),
    /// Covers unparsable, non-finite, zero and negative amounts alike.
    #[error("Enter a positive number.")]
    InvalidAmount,
}

/// Contract violations raised by the ledger when input bypassed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("category `{0}` is not part of the ledger palette")]
    UnknownCategory(String),
    #[error("amount {0} must be strictly positive")]
    NonPositiveAmount(String),
    #[error("running total for `{0}` would overflow")]
    TotalOverflow(String),
    #[error("record {0} was not found after it was committed")]
    MissingRecord(String),
}

/// Reasons a category/color table cannot be used as a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one category")]
    Empty,
    #[error("category names must not be blank")]
    BlankName,
    #[error("duplicate category `{0}`")]
    Duplicate(String),
}

/// Failures while building a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("default category `{0}` is not part of the palette")]
    UnknownDefaultCategory(String),
}

/// Outcome of a rejected or failed add attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error("ledger contract violated: {0}")]
    Integration(#[from] PreconditionError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<PaletteError> for ConfigError {
    fn from(err: PaletteError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

impl From<SessionError> for ConfigError {
    fn from(err: SessionError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_uses_fixed_message() {
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            INVALID_AMOUNT_MESSAGE
        );
    }

    #[test]
    fn submit_error_wraps_rejections_transparently() {
        let err = SubmitError::from(ValidationError::UnknownCategory("Zzz".into()));
        assert_eq!(err.to_string(), "Unknown category `Zzz`");
    }
}
