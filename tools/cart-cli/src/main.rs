//! Cart CLI - Drive the shopping cart widget from a terminal.
//!
//! Commands:
//! - `cart run` - Interactive cart session (default)
//! - `cart show` - Print the cart and its summary
//! - `cart html` - Render the cart as HTML markup
//! - `cart reset` - Remove the saved cart
//! - `cart init` - Write a default cart.toml

mod commands;
mod config;
mod context;
mod output;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{HtmlArgs, InitArgs, ResetArgs, RunArgs};

/// Cart CLI - Browse and edit a persisted shopping cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory the cart is saved in
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open an interactive cart session
    Run(RunArgs),

    /// Print the cart and its summary
    Show,

    /// Render the cart as HTML
    Html(HtmlArgs),

    /// Remove the saved cart
    Reset(ResetArgs),

    /// Write a default cart.toml in the current directory
    Init(InitArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    init_tracing(output.is_verbose());

    let ctx = match context::Context::load(cli.config.as_deref(), cli.data_dir, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::run(args, &ctx),
        Commands::Show => commands::show::run(&ctx),
        Commands::Html(args) => commands::html::run(args, &ctx),
        Commands::Reset(args) => commands::reset::run(args, &ctx),
        Commands::Init(args) => commands::init::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
