//! Output formatting for the CLI.
//!
//! Human-readable messages are suppressed in `--json` mode so stdout carries
//! nothing but the JSON document; errors are still reported, as JSON on stderr.

use console::{style, StyledObject};

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Confirmation of a completed action.
    pub fn success(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Something the user should notice; goes to stderr.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("!").yellow().bold(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Diagnostic line, shown with `--verbose` only.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{}", dim(msg));
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// Pretty-print a serializable value to stdout.
    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "failed to serialize output"),
        }
    }

    /// An aligned `label: value` line.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {:<16} {}", dim(&format!("{}:", key)), value);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn dim(text: &str) -> StyledObject<&str> {
    style(text).dim()
}
