//! OLED display driver

mod font;
mod ssd1306;

pub use ssd1306::Ssd1306;

/// Concrete I2C bus the panel is wired to
pub type DisplayBus = embassy_rp::i2c::I2c<'static, embassy_rp::i2c::Async>;

/// The panel as wired on this board
pub type Display = Ssd1306<DisplayBus>;
