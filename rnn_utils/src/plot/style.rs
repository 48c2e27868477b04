//! Colors, markers and the process-wide font size

use crate::error::{Result, RnnUtilsError};
use plotters::style::RGBColor;
use std::sync::OnceLock;

/// Font size used for chart text unless configured otherwise
pub const DEFAULT_FONT_SIZE: u32 = 12;

static FONT_SIZE: OnceLock<u32> = OnceLock::new();

/// Set the chart font size for the rest of the process.
///
/// Only the first call has an effect; returns false when the size had already
/// been fixed, either by an earlier call or by rendering a chart.
pub fn configure_font_size(size: u32) -> bool {
    FONT_SIZE.set(size).is_ok()
}

/// Chart font size, fixed to [`DEFAULT_FONT_SIZE`] on first use if unset
pub fn font_size() -> u32 {
    *FONT_SIZE.get_or_init(|| DEFAULT_FONT_SIZE)
}

/// Named line colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    SteelBlue,
    DarkRed,
    Green,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::SteelBlue => "steelblue",
            Color::DarkRed => "darkred",
            Color::Green => "green",
        }
    }

    pub fn rgb(&self) -> RGBColor {
        match self {
            Color::Black => RGBColor(0, 0, 0),
            Color::SteelBlue => RGBColor(70, 130, 180),
            Color::DarkRed => RGBColor(139, 0, 0),
            Color::Green => RGBColor(0, 128, 0),
        }
    }
}

/// Point marker shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Star,
    Cross,
    Circle,
}

impl Marker {
    /// Single-character symbol for the marker
    pub fn symbol(&self) -> char {
        match self {
            Marker::Star => '*',
            Marker::Cross => 'x',
            Marker::Circle => 'o',
        }
    }
}

/// Colors available to one prediction chart
pub const PREDICTION_COLORS: [Color; 4] =
    [Color::Black, Color::SteelBlue, Color::DarkRed, Color::Green];

/// Markers available to one prediction chart
pub const PREDICTION_MARKERS: [Marker; 3] = [Marker::Star, Marker::Cross, Marker::Circle];

/// Repeating color cycle for charts with an open-ended number of series
pub const SERIES_CYCLE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Color of the `index`-th series in the repeating cycle
pub fn cycle_color(index: usize) -> RGBColor {
    SERIES_CYCLE[index % SERIES_CYCLE.len()]
}

/// Hands out palette entries from the back of a fixed list, one at a time.
///
/// Each chart owns its own cursor, so nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct PaletteCursor<'a, T> {
    entries: &'a [T],
    remaining: usize,
    kind: &'static str,
}

impl<'a, T: Copy> PaletteCursor<'a, T> {
    pub fn new(entries: &'a [T], kind: &'static str) -> Self {
        Self {
            entries,
            remaining: entries.len(),
            kind,
        }
    }

    /// Take the next entry, last one first
    pub fn next_entry(&mut self) -> Result<T> {
        if self.remaining == 0 {
            return Err(RnnUtilsError::ResourceExhausted(format!(
                "All {} {} entries are in use",
                self.entries.len(),
                self.kind
            )));
        }
        self.remaining -= 1;
        Ok(self.entries[self.remaining])
    }

    /// Entries not yet handed out
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
