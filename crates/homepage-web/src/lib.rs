#![forbid(unsafe_code)]

//! WASM frontend for the personal start page.
//!
//! Binds `homepage-core` to the browser: the hosting page calls
//! `startPage(options)` (or `new StartPageWeb().init(document, options)`) once
//! its markup is in place, and keeps the returned handle until teardown.
//!
//! Required markup:
//! - an `input.searchField` text input,
//! - a `.clock` element,
//! - the document `title`.
//!
//! An optional `.links` container receives one anchor per quick link.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{StartPageWeb, start_page};

pub const SEARCH_FIELD_SELECTOR: &str = "input.searchField";
pub const CLOCK_SELECTOR: &str = ".clock";
pub const TITLE_SELECTOR: &str = "title";
pub const LINKS_SELECTOR: &str = ".links";

/// Start the clock timer, then attach the key listener.
///
/// If attaching fails the timer is stopped again, so a handle is either fully
/// wired or not wired at all. Returns the timer id.
pub fn start_timer_then_listen<T, E>(
    start_timer: impl FnOnce() -> Result<T, E>,
    attach_listener: impl FnOnce() -> Result<(), E>,
    stop_timer: impl FnOnce(T),
) -> Result<T, E> {
    let timer = start_timer()?;
    match attach_listener() {
        Ok(()) => Ok(timer),
        Err(err) => {
            stop_timer(timer);
            Err(err)
        }
    }
}

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct StartPageWeb;

#[cfg(not(target_arch = "wasm32"))]
impl StartPageWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }

    pub fn is_running(&self) -> bool {
        false
    }

    pub fn destroy(&mut self) {}
}
