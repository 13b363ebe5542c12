#![forbid(unsafe_code)]

//! Search redirect target.
//!
//! A [`SearchEngine`] is a base URL plus the name of the query parameter that
//! carries the user's text. The redirect URL keeps any query pairs already on
//! the base (e.g. DuckDuckGo's `t=` source tag) and appends the search text
//! form-urlencoded, so spaces become `+` and reserved characters are
//! percent-encoded.

use url::Url;

use crate::config::ConfigError;

pub const DEFAULT_SEARCH_BASE: &str = "https://duckduckgo.com/?t=ffab";
pub const DEFAULT_QUERY_PARAM: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    base: Url,
    query_param: String,
}

impl SearchEngine {
    pub fn new(base: &str, query_param: &str) -> Result<Self, ConfigError> {
        if query_param.is_empty() {
            return Err(ConfigError::EmptyQueryParam);
        }
        let base =
            Url::parse(base).map_err(|err| ConfigError::InvalidSearchBase(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidSearchBase(format!(
                "{base} cannot carry a query"
            )));
        }
        Ok(Self {
            base,
            query_param: query_param.to_owned(),
        })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    #[must_use]
    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    /// URL the page navigates to for `text`. Empty text yields an empty value.
    #[must_use]
    pub fn redirect_url(&self, text: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair(&self.query_param, text);
        url
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_SEARCH_BASE).expect("default search base is a valid URL"),
            query_param: DEFAULT_QUERY_PARAM.to_owned(),
        }
    }
}

/// Performs the full-page navigation for a redirect.
///
/// Implementations replace the current page rather than pushing a history
/// entry.
pub trait Navigator {
    type Error;

    fn navigate(&mut self, url: &Url) -> Result<(), Self::Error>;
}

/// Navigator that records every URL it is asked to open.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    visited: Vec<Url>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visited(&self) -> &[Url] {
        &self.visited
    }
}

impl Navigator for RecordingNavigator {
    type Error = core::convert::Infallible;

    fn navigate(&mut self, url: &Url) -> Result<(), Self::Error> {
        self.visited.push(url.clone());
        Ok(())
    }
}
