//! Chart construction and display
//!
//! - [`prediction`]: model output against the original series
//! - [`history`]: per-epoch training metrics
//! - [`figure`]: the chart model both of them produce
//! - [`surface`]: where finished figures are shown

pub mod figure;
pub mod history;
pub mod prediction;
pub mod style;
pub mod surface;

pub use self::figure::{Figure, LegendPosition, Line, LineKind};
pub use self::history::{plot_history, plot_loss_acc, HistoryPlotOptions};
pub use self::prediction::{plot_pred, PredictionPlotOptions, PredictionSeries};
pub use self::style::{configure_font_size, font_size, Color, Marker};
pub use self::surface::{RecordingSurface, Surface, SvgSurface};
