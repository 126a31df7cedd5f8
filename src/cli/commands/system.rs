use crate::cli::errors::CommandResult;
use crate::cli::help;
use crate::cli::output::{info, section, warning};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show the tracker version", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first().map(|name| name.to_lowercase()) else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.registry.get(&name) {
        Some(entry) => help::print_command(entry),
        None => warning(format!("No help for `{name}`.")),
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section(format!("Expense Tracker {}", env!("CARGO_PKG_VERSION")));
    info("  Expenses live in memory only and are discarded on exit.");
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Ok(())
}
