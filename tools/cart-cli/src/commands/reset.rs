//! Drop the persisted cart.

use anyhow::Result;
use cart_commerce::store::CartStore;
use dialoguer::Confirm;

use super::ResetArgs;
use crate::context::Context;

/// Run the reset command.
pub fn run(args: ResetArgs, ctx: &Context) -> Result<()> {
    let store = CartStore::with_key(ctx.backend(), ctx.config.widget.storage_key.clone());

    ctx.output.kv("Data dir", &ctx.data_dir.display().to_string());
    ctx.output.kv("Key", store.key());

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Remove the saved cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Reset cancelled");
            return Ok(());
        }
    }

    store.clear()?;
    ctx.output.success("Cart cleared; the next run starts from the default items");
    Ok(())
}
