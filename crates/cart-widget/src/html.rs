//! In-memory surface that renders to HTML markup.
//!
//! Keeps the projected state so tests and hosts can inspect it, and emits the
//! cart markup on demand. Confirmation answers are scripted with
//! [`HtmlSurface::answer_confirm`].

use std::collections::{BTreeMap, VecDeque};

use cart_commerce::ItemId;

use crate::surface::{ItemRow, Surface, SummaryField};

#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    rows: Vec<ItemRow>,
    empty_message: Option<String>,
    summary: BTreeMap<SummaryField, String>,
    select_all: bool,
    notices: Vec<String>,
    prompts: Vec<String>,
    answers: VecDeque<bool>,
    default_answer: bool,
}

impl HtmlSurface {
    /// A surface that declines every confirmation unless told otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every unscripted confirmation with `answer`.
    pub fn with_default_answer(mut self, answer: bool) -> Self {
        self.default_answer = answer;
        self
    }

    /// Queue the answer to the next confirmation.
    pub fn answer_confirm(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn empty_message(&self) -> Option<&str> {
        self.empty_message.as_deref()
    }

    /// Text of a summary field, empty until rendered.
    pub fn summary_text(&self, field: SummaryField) -> &str {
        self.summary.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_select_all_checked(&self) -> bool {
        self.select_all
    }

    /// Notices shown so far.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Confirmation prompts asked so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Markup for the item list container.
    pub fn render_items(&self) -> String {
        if let Some(message) = &self.empty_message {
            return format!(
                r#"<div id="cartItems"><p class="cart-empty">{}</p></div>"#,
                html_escape(message)
            );
        }

        let rows: String = self.rows.iter().map(render_row).collect();
        format!(r#"<div id="cartItems">{}</div>"#, rows)
    }

    /// Markup for the summary panel.
    pub fn render_summary(&self) -> String {
        let fields: String = SummaryField::ALL
            .iter()
            .map(|field| {
                format!(
                    r#"
    <p><span class="summary-label">{}</span> <span id="{}">{}</span></p>"#,
                    summary_label(*field),
                    field.element_id(),
                    html_escape(self.summary_text(*field))
                )
            })
            .collect();

        format!(
            r#"<section class="cart-summary">{}
</section>"#,
            fields
        )
    }

    /// Markup for the whole widget.
    pub fn render(&self) -> String {
        format!(
            r#"<div class="cart">
<header class="cart-header">
    <label><input type="checkbox" id="selectAllCheckbox" {}> Select all</label>
    <button class="delete-selected-btn">Delete selected</button>
</header>
{}
{}
<button class="order-btn">Place order</button>
</div>"#,
            if self.select_all { "checked" } else { "" },
            self.render_items(),
            self.render_summary()
        )
    }
}

impl Surface for HtmlSurface {
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
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }
}

fn render_row(row: &ItemRow) -> String {
    let id = html_escape(row.id.as_str());
    format!(
        r#"
<div class="cart-item" data-id="{id}">
    <input type="checkbox" class="item-checkbox" data-id="{id}" {checked}>
    <img src="{image}" alt="{name}" class="item-image">
    <div class="item-details">
        <h3>{name}</h3>
        <p class="price">{price}</p>
    </div>
    <div class="quantity-control">
        <button class="decrease-quantity" data-id="{id}">-</button>
        <input type="number" class="item-quantity" value="{quantity}" min="1" data-id="{id}">
        <button class="increase-quantity" data-id="{id}">+</button>
    </div>
</div>"#,
        id = id,
        checked = if row.selected { "checked" } else { "" },
        image = html_escape(&row.image_url),
        name = html_escape(&row.name),
        price = html_escape(&row.price),
        quantity = row.quantity,
    )
}

fn summary_label(field: SummaryField) -> &'static str {
    match field {
        SummaryField::SelectedItemsTotal => "Selected items",
        SummaryField::ShippingFee => "Shipping",
        SummaryField::TotalPayment => "Total",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
