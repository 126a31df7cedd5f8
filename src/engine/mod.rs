//! Validation, projection and session orchestration on top of the ledger.

pub mod clock;
pub mod services;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use services::{ChartProjector, ChartSection, InputValidator, ValidatedInput};
pub use session::{ExpenseSession, SessionSnapshot, SubmitOutcome, TableRow};
