//! Graph rendering task
//!
//! Consumes averaged values, scrolls them through the column history, and
//! redraws the whole frame on every update.

use defmt::*;
use portable_atomic::Ordering;

use thermograph_core::graph::{self, TrendHistory};

use crate::channels::{AVERAGE_CHANNEL, WINDOW_LEN};
use crate::display::Display;

/// Graph task - owns the panel and the column history
#[embassy_executor::task]
pub async fn graph_task(mut display: Display) {
    info!("Graph task started");

    let mut trend = TrendHistory::new();

    loop {
        let average = AVERAGE_CHANNEL.receive().await;
        trend.push(average);

        let window = WINDOW_LEN.load(Ordering::Relaxed);
        graph::draw(&mut display, &trend, window);

        // A failed flush leaves this frame stale; the next average redraws
        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
