//! Projection of cart state onto a [`Surface`], and translation of raw
//! interaction events into [`CartCommand`]s.
//!
//! Item rows are redrawn wholesale on every render, so item-level events are
//! routed through one dispatch table keyed by `(Interaction, TargetKind)`
//! instead of per-row handlers.

use std::collections::HashMap;

use cart_commerce::cart::{Item, Summary};
use cart_commerce::{CurrencyFormat, ItemId};

use crate::config::Messages;
use crate::event::{CartCommand, Interaction, TargetKind, UiEvent};
use crate::surface::{ItemRow, Surface, SummaryField};

/// Outcome of routing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Dispatch {
    Command(CartCommand),
    /// Reject the quantity text and put the last known value back.
    RestoreQuantity(ItemId),
    OrderNotice,
    Ignore,
}

type Route = fn(&UiEvent, &HashMap<ItemId, u32>) -> Dispatch;

const ROUTES: &[(Interaction, TargetKind, Route)] = &[
    (Interaction::Change, TargetKind::ItemCheckbox, route_item_checkbox as Route),
    (Interaction::Change, TargetKind::ItemQuantity, route_quantity_input as Route),
    (Interaction::Click, TargetKind::DecreaseQuantity, route_decrease as Route),
    (Interaction::Click, TargetKind::IncreaseQuantity, route_increase as Route),
    (Interaction::Change, TargetKind::SelectAll, route_select_all as Route),
    (Interaction::Click, TargetKind::DeleteSelected, route_delete_selected as Route),
    (Interaction::Click, TargetKind::PlaceOrder, route_place_order as Route),
];

fn route_item_checkbox(event: &UiEvent, _: &HashMap<ItemId, u32>) -> Dispatch {
    match (&event.item_id, event.checked()) {
        (Some(id), Some(selected)) => Dispatch::Command(CartCommand::SetSelection {
            id: id.clone(),
            selected,
        }),
        _ => Dispatch::Ignore,
    }
}

fn route_quantity_input(event: &UiEvent, _: &HashMap<ItemId, u32>) -> Dispatch {
    let Some(id) = &event.item_id else {
        return Dispatch::Ignore;
    };
    match event.text().and_then(parse_quantity) {
        Some(quantity) => Dispatch::Command(CartCommand::SetQuantity {
            id: id.clone(),
            quantity,
        }),
        None => Dispatch::RestoreQuantity(id.clone()),
    }
}

fn route_decrease(event: &UiEvent, quantities: &HashMap<ItemId, u32>) -> Dispatch {
    let Some(id) = &event.item_id else {
        return Dispatch::Ignore;
    };
    match quantities.get(id) {
        Some(&current) if current > 1 => Dispatch::Command(CartCommand::SetQuantity {
            id: id.clone(),
            quantity: i64::from(current) - 1,
        }),
        _ => Dispatch::Ignore,
    }
}

fn route_increase(event: &UiEvent, quantities: &HashMap<ItemId, u32>) -> Dispatch {
    let Some(id) = &event.item_id else {
        return Dispatch::Ignore;
    };
    match quantities.get(id) {
        Some(&current) => Dispatch::Command(CartCommand::SetQuantity {
            id: id.clone(),
            quantity: i64::from(current) + 1,
        }),
        None => Dispatch::Ignore,
    }
}

fn route_select_all(event: &UiEvent, _: &HashMap<ItemId, u32>) -> Dispatch {
    match event.checked() {
        Some(selected) => Dispatch::Command(CartCommand::SetAllSelection(selected)),
        None => Dispatch::Ignore,
    }
}

fn route_delete_selected(_: &UiEvent, _: &HashMap<ItemId, u32>) -> Dispatch {
    Dispatch::Command(CartCommand::DeleteSelected)
}

fn route_place_order(_: &UiEvent, _: &HashMap<ItemId, u32>) -> Dispatch {
    Dispatch::OrderNotice
}

/// Parse quantity field text. Anything that is not an integer >= 1 is rejected.
fn parse_quantity(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|&q| q >= 1)
}

/// Draws cart state on a surface and routes its events.
#[derive(Debug)]
pub struct CartRenderer<S> {
    surface: S,
    currency: CurrencyFormat,
    messages: Messages,
    /// Quantity of each row as last drawn.
    quantities: HashMap<ItemId, u32>,
    bound: bool,
}

impl<S: Surface> CartRenderer<S> {
    pub fn new(surface: S, currency: CurrencyFormat, messages: Messages) -> Self {
        Self {
            surface,
            currency,
            messages,
            quantities: HashMap::new(),
            bound: false,
        }
    }

    /// Clear and redraw the item list.
    pub fn render_items(&mut self, items: &[Item]) {
        self.surface.clear_items();
        self.quantities.clear();

        if items.is_empty() {
            self.surface.show_empty(&self.messages.empty_cart);
            return;
        }

        for item in items {
            self.quantities.insert(item.id.clone(), item.quantity);
            self.surface.append_item(ItemRow::from_item(item, &self.currency));
        }
        tracing::trace!(rows = items.len(), "rendered items");
    }

    /// Write the three summary fields.
    pub fn render_summary(&mut self, summary: &Summary) {
        let values = [
            summary.selected_items_total,
            summary.shipping_fee,
            summary.total_payment,
        ];
        for (field, amount) in SummaryField::ALL.into_iter().zip(values) {
            let text = self.currency.format(amount);
            self.surface.set_summary_field(field, &text);
        }
    }

    /// Reflect the aggregate checkbox.
    pub fn render_select_all_state(&mut self, all_selected: bool) {
        self.surface.set_select_all(all_selected);
    }

    /// Start accepting events. Returns `false` if already bound.
    pub fn bind_handlers(&mut self) -> bool {
        if self.bound {
            tracing::debug!("handlers already bound");
            return false;
        }
        self.bound = true;
        true
    }

    /// Whether [`bind_handlers`](Self::bind_handlers) has run.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Translate a raw event.
    ///
    /// Local effects (restoring a rejected quantity, the order notice) are
    /// applied to the surface here; only state changes come back as commands.
    pub fn dispatch(&mut self, event: &UiEvent) -> Option<CartCommand> {
        if !self.bound {
            tracing::debug!(?event, "event before bind, ignored");
            return None;
        }

        let route = ROUTES
            .iter()
            .find(|(interaction, target, _)| {
                *interaction == event.interaction && *target == event.target
            })
            .map(|(_, _, route)| *route);

        let Some(route) = route else {
            tracing::trace!(?event, "no route");
            return None;
        };

        match route(event, &self.quantities) {
            Dispatch::Command(command) => Some(command),
            Dispatch::RestoreQuantity(id) => {
                let quantity = self.quantities.get(&id).copied().unwrap_or(1);
                tracing::debug!(%id, quantity, "rejected quantity input");
                self.surface.set_quantity_field(&id, quantity);
                None
            }
            Dispatch::OrderNotice => {
                self.surface.notify(&self.messages.order_not_implemented);
                None
            }
            Dispatch::Ignore => None,
        }
    }

    /// Ask for confirmation through the surface.
    pub fn confirm(&mut self, message: &str) -> bool {
        self.surface.confirm(message)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlSurface;
    use cart_commerce::cart::{default_items, ShippingPolicy};

    fn renderer() -> CartRenderer<HtmlSurface> {
        let mut renderer =
            CartRenderer::new(HtmlSurface::new(), CurrencyFormat::won(), Messages::default());
        renderer.bind_handlers();
        renderer.render_items(&default_items());
        renderer
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-2"), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("2.5"), None);
    }

    #[test]
    fn test_render_items_and_empty_state() {
        let mut renderer = renderer();
        assert_eq!(renderer.surface().rows().len(), 3);
        assert_eq!(renderer.surface().rows()[0].price, "120,000원");

        renderer.render_items(&[]);
        assert!(renderer.surface().rows().is_empty());
        assert_eq!(
            renderer.surface().empty_message(),
            Some(Messages::default().empty_cart.as_str())
        );
    }

    #[test]
    fn test_render_summary_formats_amounts() {
        let mut renderer = renderer();
        let summary = Summary::from_items(&default_items(), &ShippingPolicy::default());
        renderer.render_summary(&summary);

        let surface = renderer.surface();
        assert_eq!(surface.summary_text(SummaryField::SelectedItemsTotal), "145,000원");
        assert_eq!(surface.summary_text(SummaryField::ShippingFee), "0원");
        assert_eq!(surface.summary_text(SummaryField::TotalPayment), "145,000원");
    }

    #[test]
    fn test_events_ignored_until_bound() {
        let mut renderer =
            CartRenderer::new(HtmlSurface::new(), CurrencyFormat::won(), Messages::default());
        assert_eq!(renderer.dispatch(&UiEvent::delete_selected()), None);

        assert!(renderer.bind_handlers());
        assert!(!renderer.bind_handlers());
        assert_eq!(
            renderer.dispatch(&UiEvent::delete_selected()),
            Some(CartCommand::DeleteSelected)
        );
    }

    #[test]
    fn test_checkbox_and_select_all_commands() {
        let mut renderer = renderer();
        assert_eq!(
            renderer.dispatch(&UiEvent::item_checked("item2", true)),
            Some(CartCommand::SetSelection {
                id: ItemId::new("item2"),
                selected: true
            })
        );
        assert_eq!(
            renderer.dispatch(&UiEvent::select_all(false)),
            Some(CartCommand::SetAllSelection(false))
        );
    }

    #[test]
    fn test_stepper_uses_rendered_quantity() {
        let mut renderer = renderer();

        // item2 is rendered with quantity 2
        assert_eq!(
            renderer.dispatch(&UiEvent::decrease("item2")),
            Some(CartCommand::SetQuantity {
                id: ItemId::new("item2"),
                quantity: 1
            })
        );
        assert_eq!(
            renderer.dispatch(&UiEvent::increase("item2")),
            Some(CartCommand::SetQuantity {
                id: ItemId::new("item2"),
                quantity: 3
            })
        );

        // item1 is at 1: decrement does nothing
        assert_eq!(renderer.dispatch(&UiEvent::decrease("item1")), None);
        assert_eq!(renderer.dispatch(&UiEvent::increase("unknown")), None);
    }

    #[test]
    fn test_invalid_quantity_text_restores_field() {
        let mut renderer = renderer();
        renderer.surface_mut().set_quantity_field(&ItemId::new("item2"), 0);

        assert_eq!(renderer.dispatch(&UiEvent::quantity_input("item2", "abc")), None);
        assert_eq!(renderer.surface().rows()[1].quantity, 2);

        assert_eq!(renderer.dispatch(&UiEvent::quantity_input("item2", "0")), None);
        assert_eq!(renderer.surface().rows()[1].quantity, 2);

        assert_eq!(
            renderer.dispatch(&UiEvent::quantity_input("item2", "5")),
            Some(CartCommand::SetQuantity {
                id: ItemId::new("item2"),
                quantity: 5
            })
        );
    }

    #[test]
    fn test_place_order_only_notifies() {
        let mut renderer = renderer();
        assert_eq!(renderer.dispatch(&UiEvent::place_order()), None);
        assert_eq!(
            renderer.surface().notices(),
            &[Messages::default().order_not_implemented]
        );
    }

    #[test]
    fn test_unrouted_event_is_ignored() {
        let mut renderer = renderer();
        let event = UiEvent {
            interaction: Interaction::Click,
            target: TargetKind::ItemCheckbox,
            item_id: Some(ItemId::new("item1")),
            value: crate::event::EventValue::None,
        };
        assert_eq!(renderer.dispatch(&event), None);
    }
}
