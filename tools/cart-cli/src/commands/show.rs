//! Print the cart once.

use anyhow::Result;
use cart_widget::CartController;
use serde_json::json;

use crate::context::Context;
use crate::terminal::TerminalSurface;

/// Run the show command.
pub fn run(ctx: &Context) -> Result<()> {
    let surface = TerminalSurface::new(ctx.output.clone(), false);
    let mut cart = CartController::new(ctx.backend(), surface, &ctx.config.widget);
    cart.init()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": cart.items(),
            "summary": cart.summary(),
        }));
    } else {
        cart.surface().draw();
    }
    Ok(())
}
