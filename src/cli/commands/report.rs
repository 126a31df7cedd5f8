use crate::cli::errors::CommandResult;
use crate::cli::output::{info, section};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{render_chart, Table, TableColumn};
use crate::currency::format_amount;
use crate::engine::TableRow;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show all expense entries", "list", cmd_list),
        CommandEntry::new(
            "chart",
            "Show the share of expenses by category",
            "chart",
            cmd_chart,
        ),
        CommandEntry::new("totals", "Show running totals per category", "totals", cmd_totals),
        CommandEntry::new(
            "export",
            "Print records, totals and chart as JSON",
            "export",
            cmd_export,
        ),
    ]
}

/// Builds the expense table from display rows.
pub fn expense_table(rows: Vec<TableRow>, currency_symbol: &str) -> Table {
    let amount_header = if currency_symbol.trim().is_empty() {
        "Amount".to_string()
    } else {
        format!("Amount ({})", currency_symbol.trim())
    };
    Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Category"),
        TableColumn::right(amount_header),
    ])
    .with_rows(
        rows.into_iter()
            .map(|row| vec![row.date, row.category, row.amount])
            .collect(),
    )
    .with_empty_message("No expenses recorded yet.")
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let table = expense_table(context.session.table_rows(), &context.config.currency_symbol);
    section("All expense entries");
    info(table.render());
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Share of expenses by category");
    info(render_chart(&context.session.chart(), context.chart_style()));
    Ok(())
}

fn cmd_totals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.session.ledger();
    let mut rows: Vec<Vec<String>> = ledger
        .current_totals()
        .iter()
        .map(|entry| vec![entry.category.to_string(), format_amount(entry.amount)])
        .collect();
    rows.push(vec!["Total".into(), format_amount(ledger.grand_total())]);

    let table = Table::new(vec![TableColumn::left("Category"), TableColumn::right("Spent")])
        .with_rows(rows);
    section("Totals");
    info(table.render());
    Ok(())
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.session.snapshot())?;
    println!("{json}");
    Ok(())
}
