use crate::error::Result;
use crate::filter::CategoryFilter;
use crate::overlay::detail::CallToAction;
use crate::price::{CurrencyFormat, PriceFormatter};
use crate::render::Renderer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Where orders go and how the detail view links to the order form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Destination number for order messages, digits only with country code
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Anchor of the order section the detail view links to
    #[serde(default = "default_anchor")]
    pub anchor: String,

    /// Label of the detail view's call to action
    #[serde(default = "default_cta_label")]
    pub cta_label: String,

    /// Business name signed at the end of order messages
    #[serde(default = "default_business_name")]
    pub business_name: String,
}

fn default_phone() -> String {
    "573042049489".to_string()
}

fn default_anchor() -> String {
    "#contacto".to_string()
}

fn default_cta_label() -> String {
    "Quiero este".to_string()
}

fn default_business_name() -> String {
    "Repostería y Gourmet KDJ".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            anchor: default_anchor(),
            cta_label: default_cta_label(),
            business_name: default_business_name(),
        }
    }
}

/// Configuration for carta, stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartaConfig {
    /// Category selected when the page opens (`todo` for all)
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Currency conventions for prices; `null` disables formatting
    #[serde(default = "default_currency")]
    pub currency: Option<CurrencyFormat>,

    #[serde(default)]
    pub contact: ContactConfig,

    /// JSON catalog to use instead of the built-in one
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_category() -> String {
    "reposteria".to_string()
}

fn default_currency() -> Option<CurrencyFormat> {
    Some(CurrencyFormat::default())
}

impl Default for CartaConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            currency: default_currency(),
            contact: ContactConfig::default(),
            catalog: None,
        }
    }
}

impl CartaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CartaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn default_filter(&self) -> CategoryFilter {
        self.default_category
            .parse()
            .unwrap_or(CategoryFilter::All)
    }

    pub fn price_formatter(&self) -> PriceFormatter {
        PriceFormatter::new(self.currency.clone())
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.price_formatter())
    }

    pub fn call_to_action(&self) -> CallToAction {
        CallToAction {
            href: self.contact.anchor.clone(),
            label: self.contact.cta_label.clone(),
        }
    }
}
