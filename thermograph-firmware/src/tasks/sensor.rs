//! Simulated temperature sensor task
//!
//! Produces one reading per sample period and hands it to the filter,
//! blocking when the channel is full so readings are never lost.

use defmt::*;
use embassy_time::{Duration, Ticker};

use thermograph_core::sensor::RandomWalkSensor;

use crate::channels::READING_CHANNEL;

/// Sample period in milliseconds
pub const SAMPLE_PERIOD_MS: u64 = 100;

/// Sensor task - bounded random walk at a fixed rate
#[embassy_executor::task]
pub async fn sensor_task() {
    info!("Sensor task started");

    let mut sensor = RandomWalkSensor::default();
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        ticker.next().await;

        let reading = sensor.sample();
        trace!("Reading: {}", reading);

        READING_CHANNEL.send(reading).await;
    }
}
