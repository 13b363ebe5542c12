#![forbid(unsafe_code)]

//! Start page wiring.
//!
//! [`StartPage`] owns the validated configuration and routes the two host
//! callbacks: `keydown` on the search field ([`StartPage::handle_key`]) and
//! the periodic timer ([`StartPage::tick`]). The host is expected to call
//! `tick` once right after construction so the clock is never blank.

use core::fmt;

use url::Url;

use crate::clock::WallClock;
use crate::config::{ConfigError, QuickLink, StartPageConfig};
use crate::input::KeyInput;
use crate::logging;
use crate::search::{Navigator, SearchEngine};
use crate::updater::{ClockFrame, ClockUpdater, Surface};

/// Errors surfaced while bringing a page up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPageError {
    /// A required element is absent from the document.
    MissingElement(&'static str),
    Config(ConfigError),
    /// The host environment rejected an operation.
    Host(String),
}

impl fmt::Display for StartPageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(selector) => write!(f, "missing element: {selector}"),
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Host(msg) => write!(f, "host: {msg}"),
        }
    }
}

impl std::error::Error for StartPageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for StartPageError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Redirected(Url),
}

#[derive(Debug, Clone)]
pub struct StartPage {
    engine: SearchEngine,
    updater: ClockUpdater,
    links: Vec<QuickLink>,
    tick_millis: u32,
}

impl StartPage {
    pub fn new(config: &StartPageConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = config.search_engine.build()?;
        logging::info!(
            display_name = config.display_name(),
            search_base = %engine.base(),
            tick_millis = config.tick_millis,
            "start page configured"
        );
        Ok(Self {
            engine,
            updater: ClockUpdater::new(config.display_name()),
            links: config.quick_links(),
            tick_millis: config.tick_millis,
        })
    }

    #[must_use]
    pub fn search_engine(&self) -> &SearchEngine {
        &self.engine
    }

    #[must_use]
    pub fn links(&self) -> &[QuickLink] {
        &self.links
    }

    #[must_use]
    pub const fn tick_millis(&self) -> u32 {
        self.tick_millis
    }

    /// Timer callback: write the current time and greeting.
    pub fn tick<C, S>(&self, clock: &C, surface: &mut S) -> ClockFrame
    where
        C: WallClock + ?Sized,
        S: Surface + ?Sized,
    {
        self.updater.update(surface, clock.now_local())
    }

    /// Keyboard callback: redirect to the search engine on Enter.
    ///
    /// `search_text` is read by the host from the search field at the moment
    /// of the key press.
    pub fn handle_key<N>(
        &self,
        key: &KeyInput,
        search_text: &str,
        navigator: &mut N,
    ) -> Result<KeyOutcome, N::Error>
    where
        N: Navigator + ?Sized,
    {
        if !key.submits() {
            return Ok(KeyOutcome::Ignored);
        }
        Ok(KeyOutcome::Redirected(self.redirect(search_text, navigator)?))
    }

    /// Navigate to the search results for `search_text`.
    pub fn redirect<N>(&self, search_text: &str, navigator: &mut N) -> Result<Url, N::Error>
    where
        N: Navigator + ?Sized,
    {
        let url = self.engine.redirect_url(search_text);
        logging::debug!(url = %url, "search redirect");
        navigator.navigate(&url)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, LocalTime};
    use crate::input::KeyCode;
    use crate::search::RecordingNavigator;
    use crate::updater::MemorySurface;

    fn page() -> StartPage {
        StartPage::new(&StartPageConfig {
            display_name: "Ada".to_owned(),
            ..StartPageConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn enter_redirects_once() {
        let page = page();
        let mut nav = RecordingNavigator::new();
        let outcome = page
            .handle_key(&KeyInput::new(KeyCode::Enter), "cats", &mut nav)
            .unwrap();
        assert_eq!(nav.visited().len(), 1);
        assert!(nav.visited()[0].as_str().contains("q=cats"));
        assert_eq!(outcome, KeyOutcome::Redirected(nav.visited()[0].clone()));
    }

    #[test]
    fn other_keys_do_nothing() {
        let page = page();
        let mut nav = RecordingNavigator::new();
        for code in [
            KeyCode::Char('a'),
            KeyCode::Escape,
            KeyCode::Tab,
            KeyCode::Backspace,
        ] {
            let outcome = page
                .handle_key(&KeyInput::new(code), "cats", &mut nav)
                .unwrap();
            assert_eq!(outcome, KeyOutcome::Ignored);
        }
        assert!(nav.visited().is_empty());
    }

    #[test]
    fn tick_uses_configured_name() {
        let page = page();
        assert_eq!(page.tick_millis(), 1000);
        assert_eq!(page.search_engine().query_param(), "q");
        assert_eq!(page.links().len(), 4);
        let clock = FixedClock::new(LocalTime::new(7, 0, 3).unwrap());
        let mut surface = MemorySurface::default();
        page.tick(&clock, &mut surface);
        assert_eq!(surface.clock_text.as_deref(), Some("07:00:03"));
        assert_eq!(surface.title.as_deref(), Some("Good Morning, Ada"));
    }

    #[test]
    fn navigator_errors_propagate() {
        struct Refuse;
        impl Navigator for Refuse {
            type Error = &'static str;
            fn navigate(&mut self, _url: &Url) -> Result<(), Self::Error> {
                Err("blocked")
            }
        }
        let err = page()
            .handle_key(&KeyInput::new(KeyCode::Enter), "x", &mut Refuse)
            .unwrap_err();
        assert_eq!(err, "blocked");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = StartPageConfig {
            tick_millis: 0,
            ..StartPageConfig::default()
        };
        assert_eq!(StartPage::new(&cfg).unwrap_err(), ConfigError::ZeroTickInterval);
        let err: StartPageError = ConfigError::EmptyQueryParam.into();
        assert_eq!(
            err.to_string(),
            "config: search query parameter must not be empty"
        );
    }
}
