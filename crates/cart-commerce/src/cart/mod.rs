//! Shopping cart module.
//!
//! Contains the line item type, pricing calculations and seed data.

mod item;
mod pricing;
mod seed;

pub use item::{clamp_quantity, Item, MIN_QUANTITY};
pub use pricing::{
    is_all_selected, selected_total, shipping_fee, total_payment, ShippingPolicy, Summary,
    DEFAULT_SHIPPING_FEE, SHIPPING_FEE_THRESHOLD,
};
pub use seed::default_items;
