//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks,
//! plus the one shared configuration cell. Uses embassy-sync primitives for
//! safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::AtomicUsize;

use thermograph_core::filter::DEFAULT_WINDOW;

/// Channel capacity for the sensor and filter stages
const PIPELINE_CHANNEL_SIZE: usize = 3;

/// Channel capacity for raw console bytes
const CONSOLE_CHANNEL_SIZE: usize = 16;

/// Raw readings from the sensor task to the filter task
pub static READING_CHANNEL: Channel<CriticalSectionRawMutex, i16, PIPELINE_CHANNEL_SIZE> =
    Channel::new();

/// Smoothed averages from the filter task to the graph task
pub static AVERAGE_CHANNEL: Channel<CriticalSectionRawMutex, i16, PIPELINE_CHANNEL_SIZE> =
    Channel::new();

/// Raw console bytes from the UART pump to the command task.
/// The pump side never blocks; bytes are dropped when this is full.
pub static CONSOLE_BYTES: Channel<CriticalSectionRawMutex, u8, CONSOLE_CHANNEL_SIZE> =
    Channel::new();

/// Current averaging window length.
///
/// Written only by the command task, read by the filter and graph tasks
/// once per cycle. Single writer plus whole-word atomic loads make relaxed
/// ordering sufficient.
pub static WINDOW_LEN: AtomicUsize = AtomicUsize::new(DEFAULT_WINDOW);
