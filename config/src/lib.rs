//! Configuration loading and startup settings resolution.
//!
//! Sentinel reads an optional TOML file at `~/.sentinel/config.toml`, then
//! applies environment-variable overrides. The result is a fully resolved
//! [`Settings`] value computed once at startup and injected into the engine:
//! nothing downstream reads the environment ad hoc.
//!
//! | Setting | File | Env override | Default |
//! |---------|------|--------------|---------|
//! | Audit base URL | `[audit] base_url` | `SENTINEL_AUDIT_URL` | `http://127.0.0.1:8000` |
//! | Access override | `[access] bypass` | `SENTINEL_BYPASS` | off |
//! | Wallet address | `[wallet] address` | `SENTINEL_WALLET_ADDRESS` | disconnected |

use std::{env, fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use sentinel_types::{AccessOverride, WalletState};

/// Audit service endpoint used when nothing else is configured.
pub const DEFAULT_AUDIT_BASE_URL: &str = "http://127.0.0.1:8000";

const ENV_AUDIT_URL: &str = "SENTINEL_AUDIT_URL";
const ENV_BYPASS: &str = "SENTINEL_BYPASS";
const ENV_WALLET_ADDRESS: &str = "SENTINEL_WALLET_ADDRESS";

/// Raw file-level configuration. All sections are optional.
#[derive(Debug, Default, Deserialize)]
pub struct SentinelConfig {
    pub audit: Option<AuditConfig>,
    pub access: Option<AccessConfig>,
    pub wallet: Option<WalletConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuditConfig {
    /// Base URL of the audit service, without a trailing slash.
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccessConfig {
    /// Force the scan surface unlocked without a wallet. Demo escape hatch.
    #[serde(default)]
    pub bypass: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct WalletConfig {
    /// Address reported by the external wallet adapter. Presence implies a
    /// connected wallet.
    pub address: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl SentinelConfig {
    /// Location of the config file, if a home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".sentinel").join("config.toml"))
    }

    /// Load the config file. A missing file is `Ok(None)`, not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }
}

/// Fully resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub audit_base_url: String,
    pub access_override: AccessOverride,
    pub wallet: WalletState,
}

impl Settings {
    /// Resolve settings from the config file and the process environment.
    #[must_use]
    pub fn resolve(config: Option<&SentinelConfig>) -> Self {
        Self::resolve_with(config, |key| env::var(key).ok())
    }

    /// Resolution with an injectable environment lookup, for tests.
    fn resolve_with(
        config: Option<&SentinelConfig>,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let audit_base_url = env_lookup(ENV_AUDIT_URL)
            .or_else(|| {
                config
                    .and_then(|cfg| cfg.audit.as_ref())
                    .and_then(|audit| audit.base_url.clone())
            })
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIT_BASE_URL.to_string());

        let bypass = env_lookup(ENV_BYPASS)
            .map(|value| parse_bool_flag(&value))
            .unwrap_or_else(|| {
                config
                    .and_then(|cfg| cfg.access.as_ref())
                    .is_some_and(|access| access.bypass)
            });
        if bypass {
            tracing::warn!("Access override active; scan surface unlocked without a wallet");
        }

        let wallet = env_lookup(ENV_WALLET_ADDRESS)
            .or_else(|| {
                config
                    .and_then(|cfg| cfg.wallet.as_ref())
                    .and_then(|wallet| wallet.address.clone())
            })
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty())
            .map_or_else(WalletState::disconnected, WalletState::connected);

        Self {
            audit_base_url,
            access_override: AccessOverride::new(bypass),
            wallet,
        }
    }
}

fn parse_bool_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
