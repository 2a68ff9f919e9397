//! Scrolling bar-graph rendering
//!
//! Every averaged value occupies one display column. The panel is two
//! pages of eight pixels; a value below the midpoint lands on the bottom
//! page, otherwise on the top page, and within a page an ordered band
//! table picks the pixel byte.

use core::fmt::Write;

use heapless::String;

use crate::history::History;
use crate::sensor::{MAX_TEMP, MIN_TEMP};
use crate::traits::Surface;

/// Number of graph columns kept in history, one per display column slot
pub const GRAPH_COLUMNS: usize = 85;

/// Pixel column of the vertical axis; data columns start one to its right
pub const AXIS_X: u8 = 18;

/// Pixel column where the current window length is printed
const WINDOW_TEXT_X: u8 = 4;

/// Byte drawn for the vertical axis on both pages
const AXIS_BITS: u8 = 0xFF;

/// Byte drawn for the baseline along the bottom page
const BASELINE_BITS: u8 = 0x80;

/// History of averaged values, newest first
pub type TrendHistory = History<GRAPH_COLUMNS>;

/// One encoded graph column.
///
/// `bits` holds eight vertical pixels with the LSB on top; `page` selects
/// the panel half (0 = top, 1 = bottom). Bottom-page bytes keep the
/// baseline pixel (0x80) set so the x-axis stays unbroken under the dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Column {
    /// Panel half the byte lands on
    pub page: u8,
    /// Pixel pattern for the column
    pub bits: u8,
}

/// Encode one averaged value as a display column.
///
/// Total over all inputs: values outside `[MIN_TEMP, MAX_TEMP]` are clamped
/// before the band lookup. Within range the thresholds are ordered and the
/// first match wins.
pub fn encode_column(value: i16) -> Column {
    let value = value.clamp(MIN_TEMP, MAX_TEMP);
    let page = if value < 16 { 1 } else { 0 };

    let bits = if value < 2 {
        0x80
    } else if value < 4 {
        0xC0
    } else if value < 8 {
        0xA0
    } else if value < 10 {
        0x90
    } else if value < 12 {
        0x88
    } else if value < 14 {
        0x84
    } else if value < 15 {
        0x82
    } else if value < 16 {
        0x81 // last band of the bottom page
    } else if value < 20 {
        0x80
    } else if value < 22 {
        0x40
    } else if value < 24 {
        0x20
    } else if value < 25 {
        0x10
    } else if value < 26 {
        0x08
    } else if value < 28 {
        0x04
    } else if value < 29 {
        0x02
    } else {
        0x01 // last band of the top page
    };

    Column { page, bits }
}

/// Redraw the whole frame: axis, baseline, window-length readout, and one
/// encoded column per history slot.
///
/// Untouched history slots render as zero-valued columns, so the graph
/// grows in from the axis after power-on. Columns beyond the panel edge are
/// clipped by the surface.
pub fn draw<S: Surface>(surface: &mut S, trend: &TrendHistory, window_len: usize) {
    surface.clear();

    // Vertical axis marker spanning both pages
    surface.set_column(AXIS_X, 0, AXIS_BITS);
    surface.set_column(AXIS_X, 1, AXIS_BITS);

    // Baseline under every data column
    for i in 0..GRAPH_COLUMNS {
        surface.set_column(AXIS_X + 1 + i as u8, 1, BASELINE_BITS);
    }

    // Current window length, left of the axis
    let mut label: String<4> = String::new();
    let _ = write!(label, "{}", window_len);
    surface.text(WINDOW_TEXT_X, 1, &label);

    for (i, &value) in trend.entries().iter().enumerate() {
        let column = encode_column(value);
        surface.set_column(AXIS_X + 1 + i as u8, column.page, column.bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Framebuffer wide enough for the full overdrawn frame
    const FAKE_WIDTH: usize = 112;

    struct FakeSurface {
        pages: [[u8; FAKE_WIDTH]; 2],
        texts: heapless::Vec<(u8, u8, String<8>), 4>,
        cleared: usize,
    }

    impl FakeSurface {
        fn new() -> Self {
            Self {
                pages: [[0; FAKE_WIDTH]; 2],
                texts: heapless::Vec::new(),
                cleared: 0,
            }
        }
    }

    impl Surface for FakeSurface {
        fn clear(&mut self) {
            self.pages = [[0; FAKE_WIDTH]; 2];
            self.cleared += 1;
        }

        fn set_column(&mut self, x: u8, page: u8, bits: u8) {
            if (x as usize) < FAKE_WIDTH && page < 2 {
                self.pages[page as usize][x as usize] = bits;
            }
        }

        fn text(&mut self, x: u8, page: u8, text: &str) {
            let mut copy: String<8> = String::new();
            let _ = copy.push_str(text);
            let _ = self.texts.push((x, page, copy));
        }
    }

    #[test]
    fn test_band_table_is_exact() {
        let expected: &[(i16, u8, u8)] = &[
            (0, 1, 0x80),
            (1, 1, 0x80),
            (2, 1, 0xC0),
            (3, 1, 0xC0),
            (4, 1, 0xA0),
            (7, 1, 0xA0),
            (8, 1, 0x90),
            (9, 1, 0x90),
            (10, 1, 0x88),
            (11, 1, 0x88),
            (12, 1, 0x84),
            (13, 1, 0x84),
            (14, 1, 0x82),
            (15, 1, 0x81),
            (16, 0, 0x80),
            (19, 0, 0x80),
            (20, 0, 0x40),
            (21, 0, 0x40),
            (22, 0, 0x20),
            (23, 0, 0x20),
            (24, 0, 0x10),
            (25, 0, 0x08),
            (26, 0, 0x04),
            (27, 0, 0x04),
            (28, 0, 0x02),
            (29, 0, 0x01),
            (30, 0, 0x01),
        ];

        for &(value, page, bits) in expected {
            let column = encode_column(value);
            assert_eq!((column.page, column.bits), (page, bits), "value {}", value);
        }
    }

    #[test]
    fn test_page_split_at_midpoint() {
        for value in 0..16 {
            assert_eq!(encode_column(value).page, 1, "value {}", value);
        }
        for value in 16..=30 {
            assert_eq!(encode_column(value).page, 0, "value {}", value);
        }
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        assert_eq!(encode_column(-5), encode_column(0));
        assert_eq!(encode_column(99), encode_column(30));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        for value in -10..40 {
            assert_eq!(encode_column(value), encode_column(value));
        }
    }

    #[test]
    fn test_draw_places_columns_after_axis() {
        let mut surface = FakeSurface::new();
        let mut trend = TrendHistory::new();
        trend.push(25); // newest, lands at the first data column

        draw(&mut surface, &trend, 15);

        assert_eq!(surface.cleared, 1);
        // Axis spans both pages
        assert_eq!(surface.pages[0][AXIS_X as usize], 0xFF);
        assert_eq!(surface.pages[1][AXIS_X as usize], 0xFF);
        // Newest value (25 -> top page, 0x08) sits right of the axis
        assert_eq!(surface.pages[0][AXIS_X as usize + 1], 0x08);
        // Baseline stays intact under a top-page column
        assert_eq!(surface.pages[1][AXIS_X as usize + 1], 0x80);
    }

    #[test]
    fn test_draw_overwrites_baseline_with_bottom_columns() {
        let mut surface = FakeSurface::new();
        let mut trend = TrendHistory::new();
        trend.push(9); // bottom page, 0x90 (baseline bit included)

        draw(&mut surface, &trend, 15);

        assert_eq!(surface.pages[1][AXIS_X as usize + 1], 0x90);
        assert_eq!(surface.pages[0][AXIS_X as usize + 1], 0x00);
    }

    #[test]
    fn test_draw_fills_every_column_slot() {
        let mut surface = FakeSurface::new();
        let trend = TrendHistory::new();

        draw(&mut surface, &trend, 15);

        // Untouched history renders as zero-valued columns on the baseline
        for i in 0..GRAPH_COLUMNS {
            let x = AXIS_X as usize + 1 + i;
            assert_eq!(surface.pages[1][x], 0x80, "column {}", i);
        }
    }

    #[test]
    fn test_draw_prints_window_length() {
        let mut surface = FakeSurface::new();
        let trend = TrendHistory::new();

        draw(&mut surface, &trend, 42);

        assert_eq!(surface.texts.len(), 1);
        let (x, page, text) = &surface.texts[0];
        assert_eq!((*x, *page), (4, 1));
        assert_eq!(text.as_str(), "42");
    }

    #[test]
    fn test_scroll_order_newest_at_axis() {
        let mut surface = FakeSurface::new();
        let mut trend = TrendHistory::new();
        trend.push(25); // older
        trend.push(9); // newest

        draw(&mut surface, &trend, 15);

        // Newest at the axis, older one column further out
        assert_eq!(surface.pages[1][AXIS_X as usize + 1], 0x90);
        assert_eq!(surface.pages[0][AXIS_X as usize + 2], 0x08);
    }
}
