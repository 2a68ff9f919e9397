//! Serial command parsing
//!
//! The console accepts one command: a run of ASCII digits terminated by CR
//! or LF, setting the averaging window length. Parsing is byte-at-a-time so
//! the firmware can feed it straight from the receive channel.

use heapless::Vec;

/// Digits buffered for an in-progress entry. Nine digits always fit in a
/// `u32`, so the commit path needs no overflow handling.
pub const DIGIT_CAPACITY: usize = 9;

/// Outcome of feeding one byte to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandEvent {
    /// A terminator committed a complete entry; `value` is ready to publish
    SetWindow {
        /// Window length after clamping into `[1, max_window]`
        value: usize,
        /// True when the typed number had to be clamped
        clamped: bool,
    },
    /// A byte that is neither a digit nor a terminator arrived
    InvalidByte(u8),
}

/// Accumulates digit bytes into window-length commands.
///
/// Digits beyond [`DIGIT_CAPACITY`] are silently dropped until a terminator
/// arrives; the entry then commits with the digits that fit. The parser is
/// the single validation point for the window length: whatever it emits is
/// safe to publish without further bounds checks.
#[derive(Debug, Clone)]
pub struct CommandParser {
    digits: Vec<u8, DIGIT_CAPACITY>,
    max_window: usize,
}

impl CommandParser {
    /// Create a parser that clamps committed values into `[1, max_window]`
    pub fn new(max_window: usize) -> Self {
        Self {
            digits: Vec::new(),
            max_window,
        }
    }

    /// Consume one console byte
    pub fn feed(&mut self, byte: u8) -> Option<CommandEvent> {
        match byte {
            b'0'..=b'9' => {
                // Full accumulator: drop the digit, keep the entry alive
                let _ = self.digits.push(byte);
                None
            }
            b'\r' | b'\n' => {
                if self.digits.is_empty() {
                    return None;
                }

                let mut typed: u32 = 0;
                for &d in &self.digits {
                    typed = typed * 10 + u32::from(d - b'0');
                }
                self.digits.clear();

                let value = (typed as usize).clamp(1, self.max_window);
                Some(CommandEvent::SetWindow {
                    value,
                    clamped: value as u32 != typed,
                })
            }
            other => Some(CommandEvent::InvalidByte(other)),
        }
    }

    /// Digits of the entry currently being typed
    pub fn pending(&self) -> &[u8] {
        &self.digits
    }
}
