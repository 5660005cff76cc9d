//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cart_widget::WidgetConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Widget behaviour and texts.
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .widget
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (default: `$HOME/.local/share/cart`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Generate a commented default cart.toml.
pub fn generate_default_config() -> String {
    r#"# Cart widget configuration

[storage]
# data_dir = "/home/me/.local/share/cart"

[widget]
storage_key = "cartItems"

[widget.shipping]
threshold = 50000
flat_fee = 3000

[widget.currency]
group_separator = ","
marker = "원"
marker_position = "suffix"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_commerce::Money;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.widget, WidgetConfig::default());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[widget.shipping]\nflat_fee = 2500").unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.widget.shipping.flat_fee, Money::new(2500));
    }

    #[test]
    fn test_load_rejects_invalid_widget_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, r#"{"widget": {"storage_key": ""}}"#).unwrap();

        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
