//! Terminal front end that drives one [`ExpenseSession`](crate::engine::ExpenseSession).

pub mod commands;
pub mod errors;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use errors::{CliError, CommandError, CommandResult};
pub use shell::{run_cli, SCRIPT_ENV};
pub use shell_context::{CliMode, LoopControl, ShellContext, TODAY_ENV};
