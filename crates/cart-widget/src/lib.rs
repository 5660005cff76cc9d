//! Cart widget: renderer, presentation port and controller.
//!
//! Data flows one way. A [`UiEvent`] from the surface is routed by the
//! [`CartRenderer`] into a [`CartCommand`]; the [`CartController`] applies it
//! to the [`CartStore`](cart_commerce::store::CartStore), adopts the stored
//! list, recomputes the summary and redraws.
//!
//! # Example
//!
//! ```rust
//! use cart_cache::MemoryStore;
//! use cart_widget::{CartController, HtmlSurface, SummaryField, UiEvent, WidgetConfig};
//!
//! let mut cart = CartController::new(MemoryStore::new(), HtmlSurface::new(), &WidgetConfig::default());
//! cart.init().unwrap();
//!
//! cart.handle_event(&UiEvent::select_all(false)).unwrap();
//! assert_eq!(cart.surface().summary_text(SummaryField::TotalPayment), "0원");
//! ```

pub mod config;
pub mod controller;
pub mod event;
pub mod html;
pub mod renderer;
pub mod surface;

pub use config::{Messages, WidgetConfig};
pub use controller::CartController;
pub use event::{CartCommand, CartHandlers, EventValue, Interaction, TargetKind, UiEvent};
pub use html::HtmlSurface;
pub use renderer::CartRenderer;
pub use surface::{ItemRow, Surface, SummaryField};
