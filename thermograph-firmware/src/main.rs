//! Thermograph - scrolling temperature graph firmware
//!
//! Main firmware binary for RP2040-based boards. A simulated temperature
//! sensor feeds a runtime-tunable moving-average filter, and the smoothed
//! series scrolls across a 96x16 OLED as a bar graph. The averaging window
//! is adjusted live over the serial console: type a number, press Enter.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::Ssd1306;

mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Console baud rate
const CONSOLE_BAUD: u32 = 19_200;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermograph firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the serial console
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = CONSOLE_BAUD;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Console UART initialized at {} baud", CONSOLE_BAUD);

    // Setup I2C for the OLED panel (SDA=GPIO14, SCL=GPIO15)
    let i2c_bus = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c::Config::default());

    let mut display = Ssd1306::new(i2c_bus);
    if let Err(e) = display.init().await {
        // Without a panel there is nothing to run for; halt visibly
        error!("Failed to initialize display: {:?}", e);
        defmt::panic!("display init failed");
    }
    info!("OLED initialized");

    // Spawn tasks
    spawner.spawn(tasks::sensor_task()).unwrap();
    spawner.spawn(tasks::filter_task()).unwrap();
    spawner.spawn(tasks::graph_task(display)).unwrap();
    spawner.spawn(tasks::console_rx_task(rx)).unwrap();
    spawner.spawn(tasks::command_task(tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
