//! Console UART receive task
//!
//! Pumps raw bytes from the UART into the console byte channel. This side
//! never waits on the interpreter: when the channel is full the byte is
//! dropped, matching the lossy best-effort contract of the command input.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::CONSOLE_BYTES;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Console RX task - feeds raw bytes to the command task
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: BufferedUartRx) {
    info!("Console RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    if CONSOLE_BYTES.try_send(byte).is_err() {
                        warn!("Console channel full, dropping byte");
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
