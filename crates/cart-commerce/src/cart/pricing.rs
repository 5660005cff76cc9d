//! Cart pricing calculations.
//!
//! Everything in here is pure: the summary is derived from the item list on
//! every render and never stored.

use crate::cart::Item;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Selected totals at or above this ship for free.
pub const SHIPPING_FEE_THRESHOLD: Money = Money::new(50_000);

/// Fee charged below the threshold.
pub const DEFAULT_SHIPPING_FEE: Money = Money::new(3_000);

/// Sum of `price * quantity` over selected items.
pub fn selected_total(items: &[Item]) -> Money {
    items
        .iter()
        .filter(|item| item.is_selected)
        .map(Item::line_total)
        .sum()
}

/// Shipping fee for a selected total under the default policy.
pub fn shipping_fee(total: Money) -> Money {
    ShippingPolicy::default().fee(total)
}

/// Selected total plus shipping.
pub fn total_payment(selected_total: Money, shipping_fee: Money) -> Money {
    selected_total + shipping_fee
}

/// True when the list is non-empty and every item is selected.
pub fn is_all_selected(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.is_selected)
}

/// Flat-fee shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingPolicy {
    /// Totals at or above this ship for free.
    pub threshold: Money,
    /// Fee for non-empty orders below the threshold.
    pub flat_fee: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            threshold: SHIPPING_FEE_THRESHOLD,
            flat_fee: DEFAULT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    /// Fee for the given selected total. Nothing selected means no fee.
    pub fn fee(&self, total: Money) -> Money {
        if !total.is_zero() && total < self.threshold {
            self.flat_fee
        } else {
            Money::ZERO
        }
    }
}

/// Derived payment summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total of selected items.
    pub selected_items_total: Money,
    /// Shipping fee.
    pub shipping_fee: Money,
    /// Amount to pay.
    pub total_payment: Money,
}

impl Summary {
    /// Compute the summary for an item list.
    pub fn from_items(items: &[Item], policy: &ShippingPolicy) -> Self {
        let selected_items_total = selected_total(items);
        let shipping_fee = policy.fee(selected_items_total);
        Self {
            selected_items_total,
            shipping_fee,
            total_payment: total_payment(selected_items_total, shipping_fee),
        }
    }
}
