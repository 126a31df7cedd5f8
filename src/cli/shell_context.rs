use std::env;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    currency::DATE_FORMAT,
    engine::{Clock, ExpenseSession, FixedClock, InputValidator, SystemClock},
    errors::ValidationError,
};

use super::{
    commands,
    errors::{CliError, CommandError},
    output::{self, OutputPreferences},
    registry::CommandRegistry,
    ui::ChartStyle,
};

/// Pins the date stamped on new records, formatted `%Y-%m-%d`.
pub const TODAY_ENV: &str = "EXPENSE_TRACKER_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Everything a command handler can reach: the session, config and clock.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: ExpenseSession,
    pub config: Config,
    pub clock: Box<dyn Clock>,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration from disk and resolves the clock from the environment.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::from_env().load()?;
        let clock = clock_from_env()?;
        Self::with_config(mode, config, clock)
    }

    pub fn with_config(
        mode: CliMode,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let session = ExpenseSession::from_config(&config)?;
        output::set_preferences(OutputPreferences {
            plain_mode: config.plain_output,
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });

        Ok(Self {
            mode,
            registry,
            session,
            config,
            clock,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.session
            .palette()
            .categories()
            .map(|category| category.to_string())
            .collect()
    }

    pub fn prompt(&self) -> String {
        format!("expenses [{}]> ", self.session.selected_category())
    }

    pub fn chart_style(&self) -> ChartStyle {
        let prefs = output::current_preferences();
        ChartStyle {
            plain: prefs.plain_mode,
            color: prefs.color_enabled,
            ..ChartStyle::default()
        }
    }

    /// Runs `command` through the registry.
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let handler = self
            .registry
            .handler(command)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
        handler(self, args)?;
        if self.running {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Exit)
        }
    }

    /// Prints a command failure with a hint where one is available.
    pub fn report_error(&self, err: CommandError) {
        output::error(&err);
        match &err {
            CommandError::UnknownCommand(name) => {
                if let Some(suggestion) = self.suggest_command(name) {
                    output::info(format!("Did you mean `{suggestion}`? Type `help` for commands."));
                }
            }
            CommandError::Rejected(ValidationError::UnknownCategory(name)) => {
                if let Some(category) = InputValidator::suggest(self.session.palette(), name) {
                    output::info(format!("Did you mean `{category}`?"));
                }
            }
            CommandError::Integration(_) => {
                tracing::error!(command = ?self.last_command, error = %err, "integration failure");
            }
            _ => {}
        }
    }

    fn suggest_command(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_ascii_lowercase();
        self.registry
            .names()
            .map(|name| (levenshtein(&needle, name), name))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit the expense tracker? Entries are not saved.")
            .default(false)
            .interact()?)
    }
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|err| {
                CliError::Input(format!("{TODAY_ENV} must look like 2024-01-31: {err}"))
            })?;
            Ok(Box::new(FixedClock::new(date)))
        }
        _ => Ok(Box::new(SystemClock)),
    }
}
