//! Windowed moving-average filter
//!
//! Smooths raw readings over a runtime-adjustable window. The backing
//! buffer is always sized to the largest supported window, so the window
//! length can grow or shrink between two samples without reallocation or
//! index fixup.

use crate::history::History;

/// Largest supported averaging window.
///
/// The graph reserves two text columns for showing the current window
/// length, so it stays a two-digit value.
pub const MAX_WINDOW: usize = 60;

/// Window length at power-on
pub const DEFAULT_WINDOW: usize = 15;

/// Moving-average filter over the most recent readings.
///
/// `average` only considers samples actually received: while the buffer is
/// still filling, the divisor is the fill count rather than the requested
/// window, so early averages are unbiased instead of being dragged toward
/// zero by untouched slots.
#[derive(Debug, Clone, Default)]
pub struct WindowAverager {
    history: History<MAX_WINDOW>,
}

impl WindowAverager {
    /// Create an empty filter
    pub const fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Record a new reading
    pub fn push(&mut self, reading: i16) {
        self.history.push(reading);
    }

    /// Average of the `window` most recent readings, truncating division.
    ///
    /// `window` is trusted to be in `[1, MAX_WINDOW]`; the command parser
    /// clamps it before publication. Returns 0 before the first reading.
    pub fn average(&self, window: usize) -> i16 {
        let samples = self.history.recent(window);
        if samples.is_empty() {
            return 0;
        }

        let sum: i32 = samples.iter().map(|&v| i32::from(v)).sum();
        (sum / samples.len() as i32) as i16
    }
}
