#![forbid(unsafe_code)]

//! Start page configuration.
//!
//! The host passes a JSON object (camelCase keys) to the frontend's `init`.
//! Every field is optional; anything missing falls back to the defaults of
//! an unconfigured profile: display name `Unknown`, DuckDuckGo search, a one
//! second tick, and four DuckDuckGo quick links.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::greeting::DEFAULT_DISPLAY_NAME;
use crate::search::{DEFAULT_QUERY_PARAM, DEFAULT_SEARCH_BASE, SearchEngine};

/// Number of quick links on a page.
pub const QUICK_LINK_SLOTS: usize = 4;
pub const DEFAULT_TICK_MILLIS: u32 = 1000;
pub const DEFAULT_LINK_NAME: &str = "DuckDuckGo";
pub const DEFAULT_LINK_URL: &str = "https://duckduckgo.com";

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidJson(String),
    InvalidSearchBase(String),
    EmptyQueryParam,
    ZeroTickInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(msg) => write!(f, "invalid config json: {msg}"),
            Self::InvalidSearchBase(msg) => write!(f, "invalid search base url: {msg}"),
            Self::EmptyQueryParam => f.write_str("search query parameter must not be empty"),
            Self::ZeroTickInterval => f.write_str("tick interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchEngineConfig {
    pub base: String,
    pub query_param: String,
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_SEARCH_BASE.to_owned(),
            query_param: DEFAULT_QUERY_PARAM.to_owned(),
        }
    }
}

impl SearchEngineConfig {
    pub fn build(&self) -> Result<SearchEngine, ConfigError> {
        SearchEngine::new(&self.base, &self.query_param)
    }
}

/// A named shortcut rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}

impl Default for QuickLink {
    fn default() -> Self {
        Self {
            name: DEFAULT_LINK_NAME.to_owned(),
            url: DEFAULT_LINK_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartPageConfig {
    /// Name shown in the greeting title.
    pub display_name: String,
    pub search_engine: SearchEngineConfig,
    /// Interval between clock updates.
    pub tick_millis: u32,
    pub links: Vec<QuickLink>,
}

impl Default for StartPageConfig {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_owned(),
            search_engine: SearchEngineConfig::default(),
            tick_millis: DEFAULT_TICK_MILLIS,
            links: vec![QuickLink::default(); QUICK_LINK_SLOTS],
        }
    }
}

impl StartPageConfig {
    /// Parse a JSON config. An empty string or `null` yields the defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();
        if s.is_empty() || s == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(s).map_err(|err| ConfigError::InvalidJson(err.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_millis == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.search_engine.build().map(|_| ())
    }

    /// Display name, falling back to the default for blank values.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.display_name.trim();
        if name.is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            name
        }
    }

    /// Exactly [`QUICK_LINK_SLOTS`] links: extras are dropped, missing slots get the default.
    #[must_use]
    pub fn quick_links(&self) -> Vec<QuickLink> {
        let mut links: Vec<QuickLink> =
            self.links.iter().take(QUICK_LINK_SLOTS).cloned().collect();
        links.resize(QUICK_LINK_SLOTS, QuickLink::default());
        links
    }
}
