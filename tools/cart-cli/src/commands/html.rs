//! Render the cart as HTML markup.

use anyhow::{Context as _, Result};
use cart_widget::{CartController, HtmlSurface};

use super::HtmlArgs;
use crate::context::Context;

/// Run the html command.
pub fn run(args: HtmlArgs, ctx: &Context) -> Result<()> {
    let mut cart = CartController::new(ctx.backend(), HtmlSurface::new(), &ctx.config.widget);
    cart.init()?;
    let html = cart.surface().render();

    match args.out {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path))?;
            ctx.output.success(&format!("Wrote {}", path));
        }
        None => println!("{}", html),
    }
    Ok(())
}
