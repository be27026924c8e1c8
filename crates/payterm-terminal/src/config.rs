//! # Terminal Configuration
//!
//! Configuration for the terminal boundary: merchant receipt header data
//! and device identity.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PAYTERM_MERCHANT_NAME="Mama Nkechi Stores"                         │
//! │     PAYTERM_TERMINAL_ID=2058AB47                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/payterm/payterm.toml (Linux)                             │
//! │     ~/Library/Application Support/com.payterm.pos/payterm.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # payterm.toml
//! [merchant]
//! name = "Mama Nkechi Stores"
//! address = "12 Allen Avenue, Ikeja"
//! phone = "+234 801 234 5678"
//! logo = "logo.bmp"
//!
//! [terminal]
//! id = "2058AB47"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use payterm_core::MerchantInfo;

use crate::error::{TerminalError, TerminalResult};

// =============================================================================
// Config Sections
// =============================================================================

/// Merchant section of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Trading name for the receipt header.
    pub name: Option<String>,
    /// Street address line.
    pub address: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Logo image reference.
    pub logo: Option<String>,
}

/// Terminal device section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Terminal identifier assigned by the acquirer.
    pub id: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            id: "UNASSIGNED".to_string(),
        }
    }
}

// =============================================================================
// Terminal Config
// =============================================================================

/// Full terminal boundary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Merchant receipt header data.
    #[serde(default)]
    pub merchant: MerchantConfig,

    /// Terminal device identity.
    #[serde(default)]
    pub terminal: DeviceConfig,
}

impl TerminalConfig {
    /// Loads configuration: file (if present), then env overrides.
    ///
    /// A missing file is not an error - defaults apply. A present but
    /// malformed file is an error, so a typo never silently reverts the
    /// merchant header to defaults.
    pub fn load() -> TerminalResult<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path)?,
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                TerminalConfig::default()
            }
            None => {
                warn!("Could not resolve config directory, using defaults");
                TerminalConfig::default()
            }
        };

        config.apply_env_overrides();
        info!(
            terminal_id = %config.terminal.id,
            merchant = config.merchant.name.as_deref().unwrap_or("<unset>"),
            "Terminal configuration loaded"
        );
        Ok(config)
    }

    /// Loads and parses a specific TOML file.
    pub fn load_from_file(path: &std::path::Path) -> TerminalResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TerminalError::InvalidConfig(format!("read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| TerminalError::InvalidConfig(format!("parse {}: {}", path.display(), e)))
    }

    /// Platform config file location: `<config dir>/payterm.toml`.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "payterm", "pos")
            .map(|dirs| dirs.config_dir().join("payterm.toml"))
    }

    /// Applies `PAYTERM_*` environment overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("PAYTERM_MERCHANT_NAME") {
            self.merchant.name = Some(name);
        }
        if let Ok(address) = std::env::var("PAYTERM_MERCHANT_ADDRESS") {
            self.merchant.address = Some(address);
        }
        if let Ok(phone) = std::env::var("PAYTERM_MERCHANT_PHONE") {
            self.merchant.phone = Some(phone);
        }
        if let Ok(id) = std::env::var("PAYTERM_TERMINAL_ID") {
            self.terminal.id = id;
        }
    }

    /// Receipt header data, when a merchant name is configured.
    ///
    /// Without a name there is no header block at all - the composer
    /// renders the merchant-less skeleton.
    pub fn merchant_info(&self) -> Option<MerchantInfo> {
        let name = self.merchant.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(MerchantInfo {
            name: name.to_string(),
            address: self.merchant.address.clone(),
            phone: self.merchant.phone.clone(),
            logo: self.merchant.logo.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
