// Rust guideline compliant 2026-10-18

//! Output formatting module for the Satchel CLI.
//!
//! This module provides functionality for formatting inventory data and
//! command outcomes in various output formats (JSON, table, plain text).

use satchel_app::{AppError, ErrorEnvelope, NoticeEnvelope, Outcome, SuccessEnvelope};
use satchel_core::{Item, OutputFormat, SearchMethod, SearchReport};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting inventory data in different output formats.
pub trait OutputFormatter {
    /// Formats a single Item for display.
    fn format_item(&self, item: &Item) -> String;

    /// Formats a list of Items for display.
    fn format_list(&self, items: &[Item]) -> String;

    /// Formats the body of a command outcome.
    ///
    /// The one-line summary is produced separately by [`summarize`].
    fn format_outcome(&self, outcome: &Outcome) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &AppError) -> String;

    /// Formats an informational notice that is neither a result nor an error.
    fn format_notice(&self, message: &str) -> String {
        message.to_string()
    }

    /// Whether menus, prompts, and summaries should be written.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Returns a one-line, human-readable summary of an outcome.
#[must_use]
pub fn summarize(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added { item, remaining } => {
            format!("Item added: {} ({} slots left)", item.name, remaining)
        }
        Outcome::Removed { item } => format!("Item removed: {}", item.name),
        Outcome::Listed { items, capacity } => {
            format!("{} of {} slots used", items.len(), capacity)
        }
        Outcome::Found { item, search } => {
            format!("Item found: {} {}", item.name, describe_search(search))
        }
        Outcome::Sorted { report, .. } => format!(
            "Items sorted by {} ({} {})",
            report.criterion,
            report.comparisons,
            plural(report.comparisons, "comparison", "comparisons")
        ),
    }
}

fn describe_search(search: &SearchReport) -> String {
    let method = match search.method {
        SearchMethod::Linear => "linear",
        SearchMethod::Binary => "binary",
    };
    format!(
        "({} search, {} {})",
        method,
        search.probes,
        plural(search.probes, "comparison", "comparisons")
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// JSON output formatter.
///
/// Formats outcomes as single-line JSON envelopes for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_item(&self, item: &Item) -> String {
        serde_json::to_string(item)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize item" }).to_string())
    }

    fn format_list(&self, items: &[Item]) -> String {
        let output = json!({
            "items": items,
            "total": items.len(),
        });
        output.to_string()
    }

    fn format_outcome(&self, outcome: &Outcome) -> String {
        serde_json::to_string(&SuccessEnvelope::new(outcome))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize outcome" }).to_string())
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }

    fn format_notice(&self, message: &str) -> String {
        serde_json::to_string(&NoticeEnvelope::new(message))
            .unwrap_or_else(|_| json!({ "notice": message }).to_string())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Table output formatter.
///
/// Formats items as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_item(&self, item: &Item) -> String {
        let mut output = String::new();

        output.push_str(&format!("Name:      {}\n", item.name));
        output.push_str(&format!("Category:  {}\n", item.category));
        output.push_str(&format!("Quantity:  {}\n", item.quantity));
        output.push_str(&format!("Priority:  {}", item.priority));

        output
    }

    fn format_list(&self, items: &[Item]) -> String {
        if items.is_empty() {
            return "Inventory is empty.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Name", "Category", "Qty", "Priority"]);

        for item in items {
            builder.push_record(vec![
                item.name.clone(),
                item.category.clone(),
                item.quantity.to_string(),
                item.priority.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Added { .. } | Outcome::Removed { .. } => String::new(),
            Outcome::Listed { items, .. } | Outcome::Sorted { items, .. } => {
                self.format_list(items)
            }
            Outcome::Found { item, .. } => self.format_item(item),
        }
    }

    fn format_error(&self, error: &AppError) -> String {
        error.to_string()
    }
}

/// Plain text output formatter.
///
/// Formats items as tab-separated lines without decoration.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_item(&self, item: &Item) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            item.name, item.category, item.quantity, item.priority
        )
    }

    fn format_list(&self, items: &[Item]) -> String {
        if items.is_empty() {
            return "Inventory is empty.".to_string();
        }

        items
            .iter()
            .map(|item| self.format_item(item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Added { .. } | Outcome::Removed { .. } => String::new(),
            Outcome::Listed { items, .. } | Outcome::Sorted { items, .. } => {
                self.format_list(items)
            }
            Outcome::Found { item, .. } => self.format_item(item),
        }
    }

    fn format_error(&self, error: &AppError) -> String {
        error.to_string()
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
