#![forbid(unsafe_code)]

//! Local wall-clock time as seen by the start page.
//!
//! The host reads the browser's local time and builds a [`LocalTime`]; the
//! rest of the crate only ever sees validated hour/minute/second triples.

use core::fmt;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Error returned when a time component is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    OutOfRange { field: &'static str, value: u32 },
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, value } => write!(f, "{field} out of range: {value}"),
        }
    }
}

impl std::error::Error for TimeError {}

/// A local time of day with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl LocalTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a time from its components.
    ///
    /// Accepts `u32` so host values (JS numbers cast to integers) can be
    /// passed without a lossy narrowing first.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        Ok(Self {
            hour: component("hour", hour, 23)?,
            minute: component("minute", minute, 59)?,
            second: component("second", second, 59)?,
        })
    }

    /// Build a time from seconds since local midnight, wrapping at one day.
    #[must_use]
    pub const fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hour: (secs / 3600) as u8,
            minute: ((secs / 60) % 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    #[must_use]
    pub const fn seconds_of_day(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// `HH:MM:SS`, every component zero-padded to two digits.
    #[must_use]
    pub fn clock_text(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

fn component(field: &'static str, value: u32, max: u32) -> Result<u8, TimeError> {
    if value > max {
        return Err(TimeError::OutOfRange { field, value });
    }
    Ok(value as u8)
}

/// Source of the current local time.
pub trait WallClock {
    fn now_local(&self) -> LocalTime;
}

/// Clock controlled explicitly by the caller.
#[derive(Debug, Default, Clone)]
pub struct FixedClock {
    now: LocalTime,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: LocalTime) -> Self {
        Self { now }
    }

    /// Set the current time.
    pub fn set(&mut self, now: LocalTime) {
        self.now = now;
    }

    /// Advance by `secs`, wrapping past midnight.
    pub fn advance_secs(&mut self, secs: u32) {
        let next = self.now.seconds_of_day() + secs % SECONDS_PER_DAY;
        self.now = LocalTime::from_seconds_of_day(next);
    }
}

impl WallClock for FixedClock {
    fn now_local(&self) -> LocalTime {
        self.now
    }
}
