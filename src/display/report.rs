//! Budget report formatting for terminal output
//!
//! Each section becomes a two-column table (Name, Amount) with the section
//! caption on top and its total underneath. The balance line comes last.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Panel, Style};
use tabled::{Table, Tabled};

use crate::reports::ReportSection;
use crate::services::BudgetResult;

/// One rendered table line
#[derive(Tabled)]
struct AmountLine {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format one section as a table
pub fn format_section(section: &ReportSection) -> String {
    let lines: Vec<AmountLine> = section
        .rows
        .iter()
        .map(|row| AmountLine {
            name: row.name.clone(),
            amount: row.amount.to_string(),
        })
        .collect();

    let mut table = Table::new(lines);
    table
        .with(Style::ascii())
        .modify(Columns::single(1), Alignment::right())
        .with(Panel::header(section.caption.as_str()))
        .with(Panel::footer(format!("Total: {}", section.total)));

    table.to_string()
}

/// Format the whole budget: income header, the three tables, and the balance
pub fn format_budget_result(result: &BudgetResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for the {} of the month\n", result.half));
    output.push_str(&format!("Income: {}\n", result.income));

    for section in result.sections() {
        output.push('\n');
        output.push_str(&format_section(section));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&result.outcome().message());
    output.push('\n');

    output
}
