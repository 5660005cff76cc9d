//! Write a default cart.toml.

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::InitArgs;
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the init command.
pub fn run(args: InitArgs, ctx: &Context) -> Result<()> {
    let path = Path::new("cart.toml");
    if path.exists() && !args.force {
        bail!("cart.toml already exists (use --force to overwrite)");
    }

    std::fs::write(path, generate_default_config()).context("Failed to write cart.toml")?;
    ctx.output.success("Created cart.toml");
    Ok(())
}
