//! Raw interaction events and the semantic commands they map to.

use cart_commerce::ItemId;

/// What the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// A form control changed value.
    Change,
    /// A button was pressed.
    Click,
}

/// Which control the event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    ItemCheckbox,
    ItemQuantity,
    DecreaseQuantity,
    IncreaseQuantity,
    SelectAll,
    DeleteSelected,
    PlaceOrder,
}

/// Payload carried by the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValue {
    None,
    Checked(bool),
    Text(String),
}

/// A raw interaction event as a surface reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub interaction: Interaction,
    pub target: TargetKind,
    /// Row the control belongs to, for item-level controls.
    pub item_id: Option<ItemId>,
    pub value: EventValue,
}

impl UiEvent {
    /// Item checkbox toggled.
    pub fn item_checked(id: impl Into<ItemId>, checked: bool) -> Self {
        Self {
            interaction: Interaction::Change,
            target: TargetKind::ItemCheckbox,
            item_id: Some(id.into()),
            value: EventValue::Checked(checked),
        }
    }

    /// Quantity field edited.
    pub fn quantity_input(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            interaction: Interaction::Change,
            target: TargetKind::ItemQuantity,
            item_id: Some(id.into()),
            value: EventValue::Text(text.into()),
        }
    }

    /// "-" pressed on a row.
    pub fn decrease(id: impl Into<ItemId>) -> Self {
        Self::click(TargetKind::DecreaseQuantity, Some(id.into()))
    }

    /// "+" pressed on a row.
    pub fn increase(id: impl Into<ItemId>) -> Self {
        Self::click(TargetKind::IncreaseQuantity, Some(id.into()))
    }

    /// Aggregate checkbox toggled.
    pub fn select_all(checked: bool) -> Self {
        Self {
            interaction: Interaction::Change,
            target: TargetKind::SelectAll,
            item_id: None,
            value: EventValue::Checked(checked),
        }
    }

    /// Delete-selected pressed.
    pub fn delete_selected() -> Self {
        Self::click(TargetKind::DeleteSelected, None)
    }

    /// Place-order pressed.
    pub fn place_order() -> Self {
        Self::click(TargetKind::PlaceOrder, None)
    }

    fn click(target: TargetKind, item_id: Option<ItemId>) -> Self {
        Self {
            interaction: Interaction::Click,
            target,
            item_id,
            value: EventValue::None,
        }
    }

    pub(crate) fn checked(&self) -> Option<bool> {
        match self.value {
            EventValue::Checked(checked) => Some(checked),
            _ => None,
        }
    }

    pub(crate) fn text(&self) -> Option<&str> {
        match &self.value {
            EventValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A semantic cart operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    SetSelection { id: ItemId, selected: bool },
    SetAllSelection(bool),
    SetQuantity { id: ItemId, quantity: i64 },
    DeleteSelected,
}

impl CartCommand {
    /// Invoke the matching callback.
    pub fn apply<H: CartHandlers + ?Sized>(self, handlers: &mut H) -> Result<(), H::Error> {
        match self {
            CartCommand::SetSelection { id, selected } => {
                handlers.on_item_selection_change(&id, selected)
            }
            CartCommand::SetAllSelection(selected) => handlers.on_all_selection_change(selected),
            CartCommand::SetQuantity { id, quantity } => handlers.on_quantity_change(&id, quantity),
            CartCommand::DeleteSelected => handlers.on_delete_selected_items(),
        }
    }
}

/// Callbacks the renderer's commands are delivered to.
pub trait CartHandlers {
    type Error;

    fn on_item_selection_change(&mut self, id: &ItemId, selected: bool) -> Result<(), Self::Error>;

    fn on_all_selection_change(&mut self, selected: bool) -> Result<(), Self::Error>;

    fn on_quantity_change(&mut self, id: &ItemId, quantity: i64) -> Result<(), Self::Error>;

    fn on_delete_selected_items(&mut self) -> Result<(), Self::Error>;
}
