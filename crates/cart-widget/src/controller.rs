//! Cart controller.
//!
//! Owns the in-memory item list. Every handler runs the matching store
//! mutation, adopts the list the store returns, and redraws everything.

use cart_cache::KeyValueStore;
use cart_commerce::cart::{is_all_selected, Item, ShippingPolicy, Summary};
use cart_commerce::store::CartStore;
use cart_commerce::{CartError, ItemId};

use crate::config::WidgetConfig;
use crate::event::{CartHandlers, UiEvent};
use crate::renderer::CartRenderer;
use crate::surface::Surface;

/// Owns the item list and wires a store to a renderer.
pub struct CartController<K, S> {
    store: CartStore<K>,
    renderer: CartRenderer<S>,
    shipping: ShippingPolicy,
    delete_prompt: String,
    items: Vec<Item>,
}

impl<K: KeyValueStore, S: Surface> CartController<K, S> {
    /// Wire a backend and a surface together. Nothing is loaded until [`init`](Self::init).
    pub fn new(backend: K, surface: S, config: &WidgetConfig) -> Self {
        Self {
            store: CartStore::with_key(backend, config.storage_key.clone()),
            renderer: CartRenderer::new(
                surface,
                config.currency.clone(),
                config.messages.clone(),
            ),
            shipping: config.shipping,
            delete_prompt: config.messages.delete_confirm.clone(),
            items: Vec::new(),
        }
    }

    /// Load (or seed) the cart, draw it, and start accepting events.
    pub fn init(&mut self) -> Result<(), CartError> {
        self.items = self.store.initialize()?;
        self.refresh();
        self.renderer.bind_handlers();
        tracing::debug!(items = self.items.len(), "cart ready");
        Ok(())
    }

    /// Route a raw surface event and apply whatever it asks for.
    pub fn handle_event(&mut self, event: &UiEvent) -> Result<(), CartError> {
        match self.renderer.dispatch(event) {
            Some(command) => command.apply(self),
            None => Ok(()),
        }
    }

    /// Add an item (or merge its quantity) and redraw.
    pub fn add_item(&mut self, item: Item) -> Result<(), CartError> {
        self.items = self.store.add_item(item)?;
        self.refresh();
        Ok(())
    }

    /// Current item list.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Summary of the current list.
    pub fn summary(&self) -> Summary {
        Summary::from_items(&self.items, &self.shipping)
    }

    pub fn store(&self) -> &CartStore<K> {
        &self.store
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.renderer.surface_mut()
    }

    /// Redraw items, summary and the aggregate checkbox.
    pub fn refresh(&mut self) {
        let summary = self.summary();
        self.renderer.render_items(&self.items);
        self.renderer.render_summary(&summary);
        self.renderer.render_select_all_state(is_all_selected(&self.items));
    }
}

impl<K: KeyValueStore, S: Surface> CartHandlers for CartController<K, S> {
    type Error = CartError;

    fn on_item_selection_change(&mut self, id: &ItemId, selected: bool) -> Result<(), CartError> {
        self.items = self.store.set_selection(id, selected)?;
        self.refresh();
        Ok(())
    }

    fn on_all_selection_change(&mut self, selected: bool) -> Result<(), CartError> {
        self.items = self.store.set_all_selection(selected)?;
        self.refresh();
        Ok(())
    }

    fn on_quantity_change(&mut self, id: &ItemId, quantity: i64) -> Result<(), CartError> {
        self.items = self.store.set_quantity(id, quantity)?;
        self.refresh();
        Ok(())
    }

    fn on_delete_selected_items(&mut self) -> Result<(), CartError> {
        if !self.renderer.confirm(&self.delete_prompt) {
            tracing::debug!("delete cancelled");
            return Ok(());
        }
        self.items = self.store.delete_selected()?;
        self.refresh();
        Ok(())
    }
}
