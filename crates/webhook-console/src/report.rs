use std::str::FromStr;

use eyre::Result;
use prettytable::{Cell, Row, Table};

use crate::summary::DashboardSummary;

/// Output format of the `summary` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Table,
    Json,
    JsonPretty,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Format::Table),
            "json" => Ok(Format::Json),
            "json-pretty" => Ok(Format::JsonPretty),
            other => Err(format!(
                "invalid format '{}', expected table, json or json-pretty",
                other
            )),
        }
    }
}

/// Renders the dashboard summary for terminal output.
pub fn render_summary(summary: &DashboardSummary, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string(summary)?),
        Format::JsonPretty => Ok(serde_json::to_string_pretty(summary)?),
        Format::Table => Ok(render_tables(summary)),
    }
}

fn render_tables(summary: &DashboardSummary) -> String {
    if summary.total == 0 {
        return "\nNo logs found.\n".to_string();
    }

    let mut out = String::from("\n=== Webhooks ===\n");

    let mut totals = Table::new();
    totals.add_row(Row::new(vec![
        Cell::new("Total Webhooks"),
        Cell::new("Successful"),
        Cell::new("Failed"),
    ]));
    totals.add_row(Row::new(vec![
        Cell::new(&summary.total.to_string()),
        Cell::new(&summary.success.to_string()),
        Cell::new(&summary.failed.to_string()),
    ]));
    out.push_str(&totals.to_string());

    out.push_str("\nTop Events:\n");
    out.push_str(&count_table("Event", &summary.top_events).to_string());

    out.push_str("\nWebhooks Per Day:\n");
    out.push_str(&count_table("Date", &summary.daily_counts).to_string());
    out
}

fn count_table(label: &str, counts: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new(label), Cell::new("Count")]));
    for (key, count) in counts {
        table.add_row(Row::new(vec![
            Cell::new(key),
            Cell::new(&count.to_string()),
        ]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("table".parse::<Format>(), Ok(Format::Table));
        assert_eq!("json-pretty".parse::<Format>(), Ok(Format::JsonPretty));
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_empty_summary_table() {
        let out = render_summary(&DashboardSummary::default(), Format::Table).unwrap();
        assert!(out.contains("No logs found."));
    }
}
