//! Model predictions drawn against the original series

use super::figure::{Figure, LegendPosition, Line, LineKind};
use super::style::{PaletteCursor, PREDICTION_COLORS, PREDICTION_MARKERS};
use super::surface::Surface;
use crate::error::{Result, RnnUtilsError};
use crate::metrics::root_mean_squared_error;
use crate::scaling::MinMaxScaler;
use crate::windowing::WindowSampleSet;
use tracing::debug;

/// Predictions for one segment of the signal
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSeries {
    /// Model output, one value per target index
    pub predicted: Vec<f64>,
    /// The whole segment the targets were taken from
    pub actual: Vec<f64>,
    /// Positions in `actual` that the predictions correspond to
    pub indices: Vec<usize>,
}

impl PredictionSeries {
    pub fn new(predicted: Vec<f64>, actual: Vec<f64>, indices: Vec<usize>) -> Self {
        Self {
            predicted,
            actual,
            indices,
        }
    }

    /// Pair model output with the segment and sample set it was computed from
    pub fn from_samples(predicted: Vec<f64>, actual: &[f64], samples: &WindowSampleSet) -> Self {
        Self::new(predicted, actual.to_vec(), samples.y_indices.to_vec())
    }

    fn validate(&self, label: &str) -> Result<()> {
        if self.indices.is_empty() {
            return Err(RnnUtilsError::InvalidInput(format!(
                "Series '{}' has no predictions",
                label
            )));
        }
        if self.predicted.len() != self.indices.len() {
            return Err(RnnUtilsError::InvalidInput(format!(
                "Series '{}' has {} predictions for {} target indices",
                label,
                self.predicted.len(),
                self.indices.len()
            )));
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i >= self.actual.len()) {
            return Err(RnnUtilsError::InvalidInput(format!(
                "Series '{}' target index {} is outside a segment of length {}",
                label,
                index,
                self.actual.len()
            )));
        }
        Ok(())
    }
}

/// Options for [`plot_pred`]
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPlotOptions {
    /// Append the RMSE to each series' legend label
    pub rmse: bool,
    /// Overlay point markers on the predicted lines
    pub markers: bool,
    /// Text labels for positions on the x axis
    pub ticks: Option<Vec<(f64, String)>>,
    /// Present the figure on the surface before returning it
    pub show: bool,
}

impl Default for PredictionPlotOptions {
    fn default() -> Self {
        Self {
            rmse: true,
            markers: false,
            ticks: None,
            show: true,
        }
    }
}

impl PredictionPlotOptions {
    pub fn with_rmse(mut self, rmse: bool) -> Self {
        self.rmse = rmse;
        self
    }

    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }
}

/// Plot predictions and the original data.
///
/// Series are laid out left to right in the order given, each shifted by the
/// combined length of the segments placed before it. Entries without a value
/// are skipped. With a `scaler`, actual and predicted values are mapped back
/// to original units before the error is computed and drawn.
///
/// The palette holds four colors (one of them reserved for the data line) and
/// three markers; asking for more fails with `ResourceExhausted`.
pub fn plot_pred<S: AsRef<str>>(
    series: &[(S, Option<PredictionSeries>)],
    scaler: Option<&MinMaxScaler>,
    options: &PredictionPlotOptions,
    surface: &mut dyn Surface,
) -> Result<Figure> {
    let mut colors = PaletteCursor::new(&PREDICTION_COLORS, "color");
    let mut markers = PaletteCursor::new(&PREDICTION_MARKERS, "marker");

    let mut figure = Figure::new("Model prediction");
    figure.set_legend_position(LegendPosition::UpperLeft);

    let mut shift = 0;
    let mut data = Vec::new();

    for (label, entry) in series {
        let label = label.as_ref();
        let Some(entry) = entry else {
            debug!(label, "skipping series without predictions");
            continue;
        };
        entry.validate(label)?;

        let (actual, predicted) = match scaler {
            Some(scaler) => (
                scaler.inverse_transform(&entry.actual),
                scaler.inverse_transform(&entry.predicted),
            ),
            None => (entry.actual.clone(), entry.predicted.clone()),
        };

        let targets: Vec<f64> = entry.indices.iter().map(|&i| actual[i]).collect();
        let rmse = root_mean_squared_error(&targets, &predicted)?;
        let legend = if options.rmse {
            format!("{} (RMSE: {:.4})", label, rmse)
        } else {
            label.to_string()
        };
        debug!(label, rmse, shift, "placing prediction series");

        let color = colors.next_entry()?;
        let points: Vec<(f64, f64)> = entry
            .indices
            .iter()
            .zip(predicted)
            .map(|(&i, p)| ((shift + i) as f64, p))
            .collect();

        if options.markers {
            let marker = markers.next_entry()?;
            figure.add_line(
                Line::new(points.clone(), color.rgb(), LineKind::Solid).with_label(legend),
            );
            figure.add_line(Line::new(points, color.rgb(), LineKind::Markers(marker)));
        } else {
            figure
                .add_line(Line::new(points, color.rgb(), LineKind::Solid).with_label(legend));
        }

        data.extend(
            actual
                .iter()
                .enumerate()
                .map(|(i, &y)| ((shift + i) as f64, y)),
        );
        shift += actual.len();
    }

    let data_color = colors.next_entry()?;
    figure.add_line(
        Line::new(data, data_color.rgb(), LineKind::Solid).with_label("Data"),
    );

    if let Some(ticks) = &options.ticks {
        figure.set_x_ticks(ticks.clone());
    }

    if options.show {
        surface.show(&figure)?;
    }

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::style::Color;
    use crate::plot::surface::RecordingSurface;

    fn series(len: usize) -> PredictionSeries {
        let actual: Vec<f64> = (0..len).map(|v| v as f64).collect();
        let indices: Vec<usize> = (1..len).collect();
        let predicted = indices.iter().map(|&i| i as f64 + 0.5).collect();
        PredictionSeries::new(predicted, actual, indices)
    }

    #[test]
    fn test_colors_are_taken_from_the_back() {
        let mut surface = RecordingSurface::new();
        let figure = plot_pred(
            &[("train", Some(series(4))), ("test", Some(series(3)))],
            None,
            &PredictionPlotOptions::default(),
            &mut surface,
        )
        .unwrap();

        let colors: Vec<_> = figure.lines().iter().map(|l| l.color).collect();
        assert_eq!(
            colors,
            vec![Color::Green.rgb(), Color::DarkRed.rgb(), Color::SteelBlue.rgb()]
        );
        assert_eq!(surface.figures().len(), 1);
    }

    #[test]
    fn test_series_are_shifted_left_to_right() {
        let mut surface = RecordingSurface::new();
        let figure = plot_pred(
            &[("train", Some(series(4))), ("test", Some(series(3)))],
            None,
            &PredictionPlotOptions::default().with_show(false),
            &mut surface,
        )
        .unwrap();

        let test_xs: Vec<f64> = figure.lines()[1].points.iter().map(|p| p.0).collect();
        assert_eq!(test_xs, vec![5.0, 6.0]);
        assert_eq!(figure.lines()[2].points.len(), 7);
        assert!(surface.figures().is_empty());
    }

    #[test]
    fn test_rejects_misaligned_series() {
        let mut surface = RecordingSurface::new();
        let bad = PredictionSeries::new(vec![1.0], vec![1.0, 2.0], vec![1, 5]);
        let result = plot_pred(
            &[("bad", Some(bad))],
            None,
            &PredictionPlotOptions::default(),
            &mut surface,
        );
        assert!(matches!(result, Err(RnnUtilsError::InvalidInput(_))));
    }

    #[test]
    fn test_marker_set_runs_out_before_colors() {
        let mut surface = RecordingSurface::new();
        let entries: Vec<_> = (0..4).map(|i| (format!("s{}", i), Some(series(3)))).collect();
        let result = plot_pred(
            &entries,
            None,
            &PredictionPlotOptions::default().with_markers(true),
            &mut surface,
        );
        match result {
            Err(RnnUtilsError::ResourceExhausted(msg)) => assert!(msg.contains("marker")),
            other => panic!("Expected marker exhaustion, got {:?}", other.map(|f| f.legend().len())),
        }
        assert!(surface.figures().is_empty());
    }
}
