//! # Client configuration: `market.toml`
//!
//! Everything the marketplace client needs to know before the first request:
//! where the API lives, where the token is kept, and a couple of UI knobs.
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//!
//! [session]
//! token_key = "access_token"
//!
//! [ui]
//! page_size = 20
//! search_debounce_ms = 300
//! ```
//!
//! Every section and field has a default, so an empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Top-level configuration stored in `market.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key under which the bearer token is persisted.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Number of projects requested per page of the project list.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Quiet period before a search/filter edit triggers a request.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl MarketConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to change the token storage key.
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.session.token_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "market.toml"
    }

    /// The API base URL with any trailing slash removed.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
