pub mod chart_projector;
pub mod input_validator;

pub use chart_projector::{ChartProjector, ChartSection};
pub use input_validator::{InputValidator, ValidatedInput};
