//! CLI command implementations.

pub mod html;
pub mod init;
pub mod reset;
pub mod run;
pub mod show;

use clap::Args;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Answer yes to every confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the html command.
#[derive(Args)]
pub struct HtmlArgs {
    /// Write markup to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the reset command.
#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Force overwrite existing config.
    #[arg(short, long)]
    pub force: bool,
}
