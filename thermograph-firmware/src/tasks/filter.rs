//! Moving-average filter task
//!
//! Consumes raw readings, smooths them over the currently configured
//! window, and forwards the averages to the graph.

use defmt::*;
use portable_atomic::Ordering;

use thermograph_core::filter::WindowAverager;

use crate::channels::{AVERAGE_CHANNEL, READING_CHANNEL, WINDOW_LEN};

/// Filter task - windowed average with a live-adjustable window
#[embassy_executor::task]
pub async fn filter_task() {
    info!("Filter task started");

    let mut averager = WindowAverager::new();

    loop {
        let reading = READING_CHANNEL.receive().await;
        averager.push(reading);

        // Sampled fresh every cycle so console changes apply immediately
        let window = WINDOW_LEN.load(Ordering::Relaxed);
        let average = averager.average(window);
        trace!("Average over {}: {}", window, average);

        AVERAGE_CHANNEL.send(average).await;
    }
}
