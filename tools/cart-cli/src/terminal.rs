//! Terminal implementation of the presentation surface.
//!
//! Surface writes are buffered; [`TerminalSurface::draw`] prints the current
//! state. Notices print immediately and confirmations go through `dialoguer`.

use std::collections::BTreeMap;

use cart_commerce::ItemId;
use cart_widget::{ItemRow, Surface, SummaryField};
use console::style;
use dialoguer::Confirm;

use crate::output::Output;

pub struct TerminalSurface {
    output: Output,
    rows: Vec<ItemRow>,
    empty_message: Option<String>,
    summary: BTreeMap<SummaryField, String>,
    select_all: bool,
    /// Answer used instead of prompting (`--yes`).
    assume_yes: bool,
}

impl TerminalSurface {
    pub fn new(output: Output, assume_yes: bool) -> Self {
        Self {
            output,
            rows: Vec::new(),
            empty_message: None,
            summary: BTreeMap::new(),
            select_all: false,
            assume_yes,
        }
    }

    /// Print the cart. Nothing is printed in JSON mode.
    pub fn draw(&self) {
        self.output.header("Cart");
        for line in self.body_lines() {
            println!("{}", line);
        }

        for field in SummaryField::ALL {
            let text = self.summary.get(&field).map(String::as_str).unwrap_or("");
            self.output.kv(summary_label(field), text);
        }
    }

    /// The select-all line, then the rows or the empty-cart message, then a
    /// blank separator. Empty in JSON mode.
    fn body_lines(&self) -> Vec<String> {
        if self.output.is_json() {
            return Vec::new();
        }

        let check = if self.select_all { style("x").green() } else { style(" ") };
        let mut lines = vec![format!("  [{}] select all", check)];

        match &self.empty_message {
            Some(message) => lines.push(format!("  {}", style(message).dim())),
            None => lines.extend(self.rows.iter().map(format_row)),
        }
        lines.push(String::new());
        lines
    }
}

impl Surface for TerminalSurface {
    fn clear_items(&mut self) {
        self.rows.clear();
        self.empty_message = None;
    }

    fn show_empty(&mut self, message: &str) {
        self.empty_message = Some(message.to_string());
    }

    fn append_item(&mut self, row: ItemRow) {
        self.rows.push(row);
    }

    fn set_summary_field(&mut self, field: SummaryField, text: &str) {
        self.summary.insert(field, text.to_string());
    }

    fn set_select_all(&mut self, checked: bool) {
        self.select_all = checked;
    }

    fn set_quantity_field(&mut self, id: &ItemId, quantity: u32) {
        if let Some(row) = self.rows.iter_mut().find(|row| &row.id == id) {
            row.quantity = quantity;
        }
        self.output
            .warn(&format!("invalid quantity, {} stays at {}", id, quantity));
    }

    fn notify(&mut self, message: &str) {
        self.output.warn(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match Confirm::new().with_prompt(message).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}

fn format_row(row: &ItemRow) -> String {
    let check = if row.selected {
        style("x").green()
    } else {
        style(" ")
    };
    format!(
        "  [{}] {:<8} {:<24} {:>12}  {} {} {}",
        check,
        style(row.id.as_str()).dim(),
        row.name,
        row.price,
        style("-").dim(),
        style(row.quantity).bold(),
        style("+").dim()
    )
}

fn summary_label(field: SummaryField) -> &'static str {
    match field {
        SummaryField::SelectedItemsTotal => "Selected items",
        SummaryField::ShippingFee => "Shipping",
        SummaryField::TotalPayment => "Total",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(selected: bool) -> ItemRow {
        ItemRow {
            id: ItemId::new("item1"),
            name: "Earbuds".to_string(),
            image_url: String::new(),
            price: "120,000원".to_string(),
            quantity: 3,
            selected,
        }
    }

    #[test]
    fn test_format_row_contains_fields() {
        let line = console::strip_ansi_codes(&format_row(&row(true))).to_string();
        assert!(line.contains("[x]"));
        assert!(line.contains("Earbuds"));
        assert!(line.contains("120,000원"));
        assert!(line.contains("- 3 +"));
    }

    #[test]
    fn test_body_lines_show_rows_or_empty_message() {
        let mut surface = TerminalSurface::new(Output::new(false, false), false);
        surface.set_select_all(true);
        surface.append_item(row(true));

        let lines = surface.body_lines();
        assert_eq!(lines.len(), 3);
        assert!(console::strip_ansi_codes(&lines[0]).contains("[x] select all"));

        surface.clear_items();
        surface.show_empty("empty");
        let lines = surface.body_lines();
        assert_eq!(lines.len(), 3);
        assert!(console::strip_ansi_codes(&lines[1]).contains("empty"));
    }

    #[test]
    fn test_json_mode_has_no_body_lines() {
        let mut surface = TerminalSurface::new(Output::new(false, true), false);
        surface.set_select_all(true);
        surface.append_item(row(true));
        assert!(surface.body_lines().is_empty());
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut surface = TerminalSurface::new(Output::new(false, true), true);
        assert!(surface.confirm("delete?"));
    }

    #[test]
    fn test_restore_quantity_updates_row() {
        let mut surface = TerminalSurface::new(Output::new(false, true), false);
        surface.append_item(row(false));
        surface.set_quantity_field(&ItemId::new("item1"), 1);
        assert_eq!(surface.rows[0].quantity, 1);
    }
}
