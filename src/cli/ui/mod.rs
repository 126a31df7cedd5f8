//! Text renderers for the expense table and the spending chart.

pub mod chart_renderer;
pub mod table_renderer;

pub use chart_renderer::{render_chart, ChartStyle};
pub use table_renderer::{Alignment, Table, TableColumn};
