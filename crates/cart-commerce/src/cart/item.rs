//! Cart line item.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// Smallest quantity a line item can hold.
pub const MIN_QUANTITY: u32 = 1;

/// A line item in the cart.
///
/// Serialized with the camelCase field names used by the persisted cart
/// (`imageUrl`, `isSelected`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, never below [`MIN_QUANTITY`]. Stored values are clamped on read.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    /// Product image reference.
    pub image_url: String,
    /// Whether the item counts towards the payment total.
    pub is_selected: bool,
}

impl Item {
    /// Create a selected item with quantity clamped to at least one.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: quantity.max(MIN_QUANTITY),
            image_url: String::new(),
            is_selected: true,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the selection flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }

    /// Set the quantity, clamping to the valid range.
    pub fn set_quantity(&mut self, requested: i64) {
        self.quantity = clamp_quantity(requested);
    }
}

/// Clamp a requested quantity into `MIN_QUANTITY..=u32::MAX`.
pub fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(i64::from(MIN_QUANTITY))).unwrap_or(u32::MAX)
}

fn deserialize_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(clamp_quantity)
}
