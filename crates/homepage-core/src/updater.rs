#![forbid(unsafe_code)]

//! Per-tick clock and greeting update.

use crate::clock::LocalTime;
use crate::greeting::Greeting;
use crate::logging;

/// Page elements written by the clock updater.
pub trait Surface {
    /// Replace the text of the clock element.
    fn set_clock_text(&mut self, text: &str);
    /// Replace the document title.
    fn set_title(&mut self, title: &str);
}

/// Everything one tick writes to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFrame {
    pub clock_text: String,
    pub greeting: Greeting,
    pub title: String,
}

impl ClockFrame {
    #[must_use]
    pub fn render(now: LocalTime, display_name: &str) -> Self {
        let greeting = Greeting::for_hour(now.hour());
        Self {
            clock_text: now.clock_text(),
            greeting,
            title: greeting.title(display_name),
        }
    }
}

/// Writes the clock text and greeting title for a given instant.
///
/// Holds no per-tick state, so updating twice with the same instant writes
/// the same values twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockUpdater {
    display_name: String,
}

impl ClockUpdater {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn update<S: Surface + ?Sized>(&self, surface: &mut S, now: LocalTime) -> ClockFrame {
        let frame = ClockFrame::render(now, &self.display_name);
        logging::trace!(clock = %frame.clock_text, greeting = %frame.greeting, "clock tick");
        surface.set_clock_text(&frame.clock_text);
        surface.set_title(&frame.title);
        frame
    }
}

/// In-memory [`Surface`] that keeps the last written values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    pub clock_text: Option<String>,
    pub title: Option<String>,
    pub writes: usize,
}

impl Surface for MemorySurface {
    fn set_clock_text(&mut self, text: &str) {
        self.clock_text = Some(text.to_owned());
        self.writes += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
        self.writes += 1;
    }
}
