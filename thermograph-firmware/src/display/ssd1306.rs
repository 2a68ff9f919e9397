//! SSD1306 OLED display driver
//!
//! Driver for 96x16 SSD1306-class OLED panels via I2C. Drawing mutates a
//! two-page frame buffer; `flush` pushes the buffer to the panel.

use thermograph_core::traits::Surface;

use crate::display::font::{get_glyph, GLYPH_WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 96;
const HEIGHT: usize = 16;
const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_MEM_MODE: u8 = 0x20;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        // Initialization sequence for a 96x16 panel
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            (HEIGHT - 1) as u8, // 16 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEM_MODE,
            0x02,                  // Page addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config for 16-line panels
            cmd::SET_CONTRAST,
            0xAF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[0x00, cmd]).await
    }

    /// Flush the frame buffer to the display
    pub async fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            // Set page address
            self.command(cmd::SET_PAGE_ADDR | (page as u8)).await?;
            // Set column address
            self.command(cmd::SET_LOW_COLUMN | 0).await?;
            self.command(cmd::SET_HIGH_COLUMN | 0).await?;

            // Send page data
            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(SSD1306_ADDR, &data).await?;
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    #[allow(dead_code)]
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }
}

impl<I2C> Surface for Ssd1306<I2C> {
    fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    fn set_column(&mut self, x: u8, page: u8, bits: u8) {
        // Writes past the panel edge are clipped; the graph overdraws on
        // purpose and relies on this
        if (x as usize) < WIDTH && (page as usize) < PAGES {
            self.buffer[page as usize][x as usize] = bits;
        }
    }

    fn text(&mut self, x: u8, page: u8, text: &str) {
        if (page as usize) >= PAGES {
            return;
        }

        let row = &mut self.buffer[page as usize];
        let mut x = x as usize;

        for ch in text.chars() {
            if x + GLYPH_WIDTH > WIDTH {
                break;
            }

            let glyph = get_glyph(ch);
            row[x..x + GLYPH_WIDTH].copy_from_slice(glyph);
            x += GLYPH_WIDTH + 1; // One blank column between glyphs
        }
    }
}
