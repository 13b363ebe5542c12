#![forbid(unsafe_code)]

//! Time-of-day greeting shown in the page title.

use core::fmt;

/// Display name used when none is configured.
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown";

/// Greeting label derived from the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Classify an hour in `0..=23`.
    ///
    /// Hour 18 still counts as afternoon; evening starts at 19. Values above
    /// 23 are treated as evening.
    #[must_use]
    pub const fn for_hour(hour: u8) -> Self {
        match hour {
            0..=11 => Self::Morning,
            12..=18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Page title: `Good <label>, <name>`.
    #[must_use]
    pub fn title(self, display_name: &str) -> String {
        format!("Good {}, {display_name}", self.label())
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
