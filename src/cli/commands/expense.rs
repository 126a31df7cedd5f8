use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output::{info, section, success};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{render_chart, Table, TableColumn};
use crate::currency::{format_amount_with_symbol, format_date};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense in the selected or named category",
            "add <amount> [category]",
            cmd_add,
        ),
        CommandEntry::new(
            "select",
            "Choose the category used when `add` names none",
            "select <category>",
            cmd_select,
        ),
        CommandEntry::new(
            "categories",
            "List categories with their chart colors",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((amount, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: add <amount> [category]".into(),
        ));
    };
    let category = rest.join(" ");
    let category = (!category.trim().is_empty()).then_some(category.as_str());

    let today = context.clock.today();
    let outcome = context.session.submit(category, amount, today)?;

    let record = &outcome.record;
    success(format!(
        "Added {} to {} on {}.",
        format_amount_with_symbol(record.amount(), &context.config.currency_symbol),
        record.category(),
        format_date(record.date())
    ));
    info(render_chart(&outcome.chart, context.chart_style()));
    Ok(())
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: select <category>".into(),
        ));
    }
    let category = context.session.select_category(&args.join(" "))?;
    success(format!("Selected category `{category}`."));
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let selected = context.session.selected_category().clone();
    let rows = context
        .session
        .palette()
        .entries()
        .iter()
        .map(|entry| {
            let marker = if entry.category == selected { "*" } else { "" };
            vec![
                marker.to_string(),
                entry.category.to_string(),
                entry.color.to_string(),
            ]
        })
        .collect();
    let table = Table::new(vec![
        TableColumn::left(""),
        TableColumn::left("Category"),
        TableColumn::left("Color"),
    ])
    .with_rows(rows);

    section("Categories");
    info(table.render());
    Ok(())
}
