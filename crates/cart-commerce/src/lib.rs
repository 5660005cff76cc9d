//! Cart domain types and logic for the cart widget.
//!
//! - **Cart**: line items, pricing summary, shipping policy, seed data
//! - **Money**: integer amounts and locale-aware currency formatting
//! - **Store** (feature `storage`): the persisted item list
//!
//! # Example
//!
//! ```rust
//! use cart_commerce::prelude::*;
//!
//! let items = default_items();
//! let summary = Summary::from_items(&items, &ShippingPolicy::default());
//!
//! assert_eq!(summary.selected_items_total, Money::new(145_000));
//! assert_eq!(summary.total_payment.display(&CurrencyFormat::won()), "145,000원");
//! ```

pub mod cart;
pub mod error;
pub mod ids;
pub mod money;
#[cfg(feature = "storage")]
pub mod store;

pub use error::CartError;
pub use ids::ItemId;
pub use money::{CurrencyFormat, MarkerPosition, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        default_items, is_all_selected, selected_total, shipping_fee, total_payment, Item,
        ShippingPolicy, Summary,
    };
    pub use crate::error::CartError;
    pub use crate::ids::ItemId;
    pub use crate::money::{CurrencyFormat, MarkerPosition, Money};
    #[cfg(feature = "storage")]
    pub use crate::store::{CartStore, DEFAULT_STORAGE_KEY};
}
