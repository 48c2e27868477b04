//! Training and validation metric curves

use super::figure::{Figure, LegendPosition, Line, LineKind};
use super::style::cycle_color;
use super::surface::Surface;
use crate::error::{Result, RnnUtilsError};
use crate::history::{HistorySource, Metric, MetricKey, Phase};
use tracing::debug;

/// Options for [`plot_history`]
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPlotOptions {
    /// Present the figure on the surface before returning it; turn off to
    /// annotate the returned figure first
    pub show: bool,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
}

impl Default for HistoryPlotOptions {
    fn default() -> Self {
        Self {
            show: true,
            x_limits: None,
            y_limits: None,
        }
    }
}

impl HistoryPlotOptions {
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn with_x_limits(mut self, limits: (f64, f64)) -> Self {
        self.x_limits = Some(limits);
        self
    }

    pub fn with_y_limits(mut self, limits: (f64, f64)) -> Self {
        self.y_limits = Some(limits);
        self
    }
}

fn epoch_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(epoch, &v)| (epoch as f64, v))
        .collect()
}

/// Plot every metric of a training history against the epoch index.
///
/// Legend labels read `Training <metric>` or `Validation <metric>` and follow
/// the history's key order. Every key must be a known metric, optionally with
/// a `val_` prefix.
pub fn plot_history<H: HistorySource + ?Sized>(
    history: &H,
    options: &HistoryPlotOptions,
    surface: &mut dyn Surface,
) -> Result<Figure> {
    let history = history.history();
    if history.is_empty() {
        return Err(RnnUtilsError::InvalidInput(
            "History contains no metrics".to_string(),
        ));
    }

    let keys = history
        .keys()
        .map(MetricKey::parse)
        .collect::<Result<Vec<_>>>()?;

    let mut figure = Figure::new("Model metrics");
    figure
        .set_x_label("Epoch")
        .set_y_label("Metric")
        .set_legend_position(LegendPosition::UpperLeft);

    for (i, (key, (_, values))) in keys.iter().zip(history.iter()).enumerate() {
        figure.add_line(
            Line::new(epoch_points(values), cycle_color(i), LineKind::Solid).with_label(key.label()),
        );
    }

    if let Some(limits) = options.x_limits {
        figure.set_x_limits(limits);
    }
    if let Some(limits) = options.y_limits {
        figure.set_y_limits(limits);
    }

    debug!(
        metrics = history.len(),
        epochs = history.epochs(),
        "plotting training history"
    );

    if options.show {
        surface.show(&figure)?;
    }

    Ok(figure)
}

/// Plot training and validation accuracy followed by training and validation loss.
///
/// Accuracy may be stored as `accuracy` or `acc`; the first alias present is
/// used. Training and validation resolve their alias independently, so a
/// history holding `accuracy` next to `val_acc` is accepted.
pub fn plot_loss_acc<H: HistorySource + ?Sized>(
    history: &H,
    surface: &mut dyn Surface,
) -> Result<Figure> {
    let history = history.history();

    let curves = [
        (Metric::Accuracy, Phase::Training, "train acc"),
        (Metric::Accuracy, Phase::Validation, "val acc"),
        (Metric::Loss, Phase::Training, "train loss"),
        (Metric::Loss, Phase::Validation, "val loss"),
    ];

    let mut figure = Figure::new("model accuracy");
    figure
        .set_x_label("epoch")
        .set_y_label("accuracy")
        .set_legend_position(LegendPosition::UpperLeft);

    for (i, (metric, phase, label)) in curves.into_iter().enumerate() {
        let values = history.resolve(metric, phase)?;
        figure.add_line(
            Line::new(epoch_points(values), cycle_color(i), LineKind::Solid).with_label(label),
        );
    }

    surface.show(&figure)?;
    Ok(figure)
}
