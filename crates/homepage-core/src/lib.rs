#![forbid(unsafe_code)]

//! Core logic for the personal start page.
//!
//! Everything here is host-independent: the browser frontend (`homepage-web`)
//! reads the DOM and the local clock, then hands plain values to this crate.
//!
//! - [`clock`]: validated local wall-clock time and `HH:MM:SS` formatting.
//! - [`greeting`]: hour → `Morning`/`Afternoon`/`Evening` and the page title.
//! - [`search`]: search-engine templates and redirect URL construction.
//! - [`input`]: DOM key normalization for the search field.
//! - [`config`]: serde-backed page configuration.
//! - [`updater`]: the per-tick clock/title writer.
//! - [`page`]: wiring of the above behind host traits.

pub mod clock;
pub mod config;
pub mod greeting;
pub mod input;
pub mod logging;
pub mod page;
pub mod search;
pub mod updater;

pub use clock::{FixedClock, LocalTime, TimeError, WallClock};
pub use config::{ConfigError, QuickLink, SearchEngineConfig, StartPageConfig};
pub use greeting::Greeting;
pub use input::{KeyCode, KeyInput};
pub use page::{KeyOutcome, StartPage, StartPageError};
pub use search::{Navigator, RecordingNavigator, SearchEngine};
pub use url::Url;
pub use updater::{ClockFrame, ClockUpdater, MemorySurface, Surface};
