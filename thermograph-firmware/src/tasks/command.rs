//! Command interpreter task
//!
//! Consumes console bytes one at a time, accumulates window-length entries,
//! publishes committed values, and writes feedback to the console. This is
//! the only writer of `WINDOW_LEN`.

use core::fmt::Write as _;

use defmt::{debug, info, warn};
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use heapless::String;
use portable_atomic::Ordering;

use thermograph_core::command::{CommandEvent, CommandParser};
use thermograph_core::filter::MAX_WINDOW;

use crate::channels::{CONSOLE_BYTES, WINDOW_LEN};

/// Command task - parses console input and owns the console TX side
#[embassy_executor::task]
pub async fn command_task(mut tx: BufferedUartTx) {
    info!("Command task started");

    let mut parser = CommandParser::new(MAX_WINDOW);

    loop {
        let byte = CONSOLE_BYTES.receive().await;

        match parser.feed(byte) {
            Some(CommandEvent::SetWindow { value, clamped }) => {
                if clamped {
                    warn!("Requested window length out of range, clamped to {}", value);
                    send_line(
                        &mut tx,
                        "Requested window length is out of range; the nearest supported value will be used.",
                    )
                    .await;
                }

                WINDOW_LEN.store(value, Ordering::Relaxed);
                info!("Window length set to {}", value);

                let mut line: String<40> = String::new();
                let _ = write!(line, "New window length: {}", value);
                send_line(&mut tx, &line).await;
            }
            Some(CommandEvent::InvalidByte(b)) => {
                debug!("Invalid console byte: {:02x}", b);
                send_line(&mut tx, "Invalid character.").await;
            }
            None => {}
        }
    }
}

/// Write a feedback line to the console, CRLF-terminated
async fn send_line(tx: &mut BufferedUartTx, text: &str) {
    if let Err(e) = tx.write_all(text.as_bytes()).await {
        warn!("Console write failed: {:?}", e);
        return;
    }
    if let Err(e) = tx.write_all(b"\r\n").await {
        warn!("Console write failed: {:?}", e);
    }
}
