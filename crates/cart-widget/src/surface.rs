//! Presentation port.
//!
//! The renderer never touches a concrete UI. It writes to a [`Surface`], which
//! may be a DOM, a terminal, or the in-memory [`HtmlSurface`](crate::HtmlSurface).

use cart_commerce::cart::Item;
use cart_commerce::{CurrencyFormat, ItemId};

/// One row of the item list, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    /// Unit price, already formatted.
    pub price: String,
    pub quantity: u32,
    pub selected: bool,
}

impl ItemRow {
    /// Project an item into a row.
    pub fn from_item(item: &Item, currency: &CurrencyFormat) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            price: currency.format(item.price),
            quantity: item.quantity,
            selected: item.is_selected,
        }
    }
}

/// The three fields of the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SummaryField {
    SelectedItemsTotal,
    ShippingFee,
    TotalPayment,
}

impl SummaryField {
    /// All fields in display order.
    pub const ALL: [SummaryField; 3] = [
        SummaryField::SelectedItemsTotal,
        SummaryField::ShippingFee,
        SummaryField::TotalPayment,
    ];

    /// Element id used in markup.
    pub fn element_id(&self) -> &'static str {
        match self {
            SummaryField::SelectedItemsTotal => "selectedItemsTotal",
            SummaryField::ShippingFee => "shippingFee",
            SummaryField::TotalPayment => "totalPayment",
        }
    }
}

/// A place the cart can be drawn on.
pub trait Surface {
    /// Remove every item row and any empty-state message.
    fn clear_items(&mut self);

    /// Show the empty-cart message in place of the list.
    fn show_empty(&mut self, message: &str);

    /// Append one item row.
    fn append_item(&mut self, row: ItemRow);

    /// Write the text of a summary field.
    fn set_summary_field(&mut self, field: SummaryField, text: &str);

    /// Reflect the aggregate checkbox.
    fn set_select_all(&mut self, checked: bool);

    /// Overwrite the quantity field of one row.
    fn set_quantity_field(&mut self, id: &ItemId, quantity: u32);

    /// Show a transient notice.
    fn notify(&mut self, message: &str);

    /// Ask the user a yes/no question. Blocks until answered.
    fn confirm(&mut self, message: &str) -> bool;
}
