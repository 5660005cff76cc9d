//! Widget configuration.

use cart_commerce::cart::ShippingPolicy;
use cart_commerce::store::DEFAULT_STORAGE_KEY;
use cart_commerce::{CartError, CurrencyFormat};
use serde::{Deserialize, Serialize};

/// Everything the widget can be configured with. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Key the item list is persisted under.
    pub storage_key: String,

    /// Shipping fee rules.
    pub shipping: ShippingPolicy,

    /// Amount display convention.
    pub currency: CurrencyFormat,

    /// User-facing texts.
    pub messages: Messages,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            shipping: ShippingPolicy::default(),
            currency: CurrencyFormat::default(),
            messages: Messages::default(),
        }
    }
}

impl WidgetConfig {
    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::Config("storage_key must not be empty".into()));
        }
        if self.currency.group_separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(CartError::Config(
                "currency.group_separator must not contain digits".into(),
            ));
        }
        Ok(())
    }
}

/// Texts shown by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown instead of the item list when the cart is empty.
    pub empty_cart: String,
    /// Confirmation prompt before deleting selected items.
    pub delete_confirm: String,
    /// Notice for the place-order button.
    pub order_not_implemented: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_cart: "장바구니가 비어 있습니다.".to_string(),
            delete_confirm: "선택된 상품들을 장바구니에서 삭제하시겠습니까?".to_string(),
            order_not_implemented: "주문하기 기능은 구현되지 않았습니다.".to_string(),
        }
    }
}
