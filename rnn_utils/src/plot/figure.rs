//! Backend-independent chart description
//!
//! Plot functions build a [`Figure`] first and render it only when a surface
//! presents it, so callers can inspect or annotate a chart before display.

use super::style::{font_size, Marker};
use crate::error::{Result, RnnUtilsError};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::ops::Range;

const FONT_FAMILY: &str = "sans-serif";

/// Default canvas size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (1024, 640);

/// How a line's points are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Points joined by straight segments
    Solid,
    /// Unconnected point markers
    Markers(Marker),
}

/// Corner the legend is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl From<LegendPosition> for SeriesLabelPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// One drawn series
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub kind: LineKind,
    /// Legend entry; unlabeled lines stay out of the legend
    pub label: Option<String>,
}

impl Line {
    pub fn new(points: Vec<(f64, f64)>, color: RGBColor, kind: LineKind) -> Self {
        Self {
            points,
            color,
            kind,
            label: None,
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A single-panel line chart
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    lines: Vec<Line>,
    legend_position: LegendPosition,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    x_ticks: Option<Vec<(f64, String)>>,
    size: (u32, u32),
}

impl Figure {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            lines: Vec::new(),
            legend_position: LegendPosition::default(),
            x_limits: None,
            y_limits: None,
            x_ticks: None,
            size: DEFAULT_SIZE,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn set_x_label<S: Into<String>>(&mut self, label: S) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    pub fn set_y_label<S: Into<String>>(&mut self, label: S) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn add_line(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Legend entries in drawing order
    pub fn legend(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| line.label.as_deref())
            .collect()
    }

    pub fn legend_position(&self) -> LegendPosition {
        self.legend_position
    }

    pub fn set_legend_position(&mut self, position: LegendPosition) -> &mut Self {
        self.legend_position = position;
        self
    }

    pub fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }

    pub fn set_x_limits(&mut self, limits: (f64, f64)) -> &mut Self {
        self.x_limits = Some(limits);
        self
    }

    pub fn y_limits(&self) -> Option<(f64, f64)> {
        self.y_limits
    }

    pub fn set_y_limits(&mut self, limits: (f64, f64)) -> &mut Self {
        self.y_limits = Some(limits);
        self
    }

    pub fn x_ticks(&self) -> Option<&[(f64, String)]> {
        self.x_ticks.as_deref()
    }

    /// Replace the numeric x axis labels with text labels at given positions
    pub fn set_x_ticks(&mut self, ticks: Vec<(f64, String)>) -> &mut Self {
        self.x_ticks = Some(ticks);
        self
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn set_size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    fn axis_ranges(&self) -> (Range<f64>, Range<f64>) {
        let points = self.lines.iter().flat_map(|line| line.points.iter());
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let x = self
            .x_limits
            .unwrap_or_else(|| padded(x_min, x_max, 0.0));
        let y = self
            .y_limits
            .unwrap_or_else(|| padded(y_min, y_max, 0.05));

        (widen(x), widen(y))
    }

    /// Render the figure into an SVG document
    pub fn render_svg(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(plot_error)?;

            let font = font_size() as f64;
            let (x_range, y_range) = self.axis_ranges();
            let y_bottom = y_range.start;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, (FONT_FAMILY, font + 4.0))
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(65)
                .build_cartesian_2d(x_range, y_range)
                .map_err(plot_error)?;

            let hide_labels = |_: &f64| String::new();
            let mut mesh = chart.configure_mesh();
            mesh.label_style((FONT_FAMILY, font));
            if self.x_ticks.is_some() {
                mesh.x_label_formatter(&hide_labels);
            }
            if let Some(label) = &self.x_label {
                mesh.x_desc(label.as_str());
            }
            if let Some(label) = &self.y_label {
                mesh.y_desc(label.as_str());
            }
            mesh.draw().map_err(plot_error)?;

            for line in &self.lines {
                draw_line(&mut chart, line, font)?;
            }

            if !self.legend().is_empty() {
                chart
                    .configure_series_labels()
                    .position(self.legend_position.into())
                    .label_font((FONT_FAMILY, font))
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()
                    .map_err(plot_error)?;
            }

            if let Some(ticks) = &self.x_ticks {
                for (position, label) in ticks {
                    let (px, py) = chart.backend_coord(&(*position, y_bottom));
                    root.draw(&Text::new(
                        label.clone(),
                        (px - 4 * label.len() as i32, py + 8),
                        (FONT_FAMILY, font),
                    ))
                    .map_err(plot_error)?;
                }
            }

            root.present().map_err(plot_error)?;
        }
        Ok(svg)
    }
}

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_line(chart: &mut Chart<'_, '_>, line: &Line, font: f64) -> Result<()> {
    let color = line.color;
    match line.kind {
        LineKind::Solid => {
            let series = chart
                .draw_series(LineSeries::new(
                    line.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(plot_error)?;
            if let Some(label) = &line.label {
                series.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            }
        }
        LineKind::Markers(Marker::Circle) => {
            chart
                .draw_series(
                    line.points
                        .iter()
                        .map(|&p| Circle::new(p, 4, color.stroke_width(1))),
                )
                .map_err(plot_error)?;
        }
        LineKind::Markers(Marker::Cross) => {
            chart
                .draw_series(
                    line.points
                        .iter()
                        .map(|&p| Cross::new(p, 4, color.stroke_width(1))),
                )
                .map_err(plot_error)?;
        }
        LineKind::Markers(Marker::Star) => {
            let style = (FONT_FAMILY, font * 1.5).into_font().color(&color);
            chart
                .draw_series(
                    line.points
                        .iter()
                        .map(|&p| Text::new("*", p, style.clone())),
                )
                .map_err(plot_error)?;
        }
    }
    Ok(())
}

fn padded(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = (max - min) * fraction;
    (min - pad, max + pad)
}

// Zero-width ranges break the coordinate mapping.
fn widen((min, max): (f64, f64)) -> Range<f64> {
    if max > min {
        min..max
    } else {
        (min - 0.5)..(max + 0.5)
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> RnnUtilsError {
    RnnUtilsError::PlotError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_figure() -> Figure {
        let mut figure = Figure::new("Sample");
        figure
            .add_line(
                Line::new(vec![(0.0, 1.0), (1.0, 2.0)], RGBColor(0, 0, 0), LineKind::Solid)
                    .with_label("first"),
            )
            .add_line(Line::new(
                vec![(0.0, 1.0), (1.0, 2.0)],
                RGBColor(0, 128, 0),
                LineKind::Markers(Marker::Star),
            ));
        figure
    }

    #[test]
    fn test_legend_skips_unlabeled_lines() {
        assert_eq!(sample_figure().legend(), vec!["first"]);
    }

    #[test]
    fn test_axis_ranges_honor_limits() {
        let mut figure = sample_figure();
        figure.set_x_limits((-5.0, 5.0));
        let (x, y) = figure.axis_ranges();
        assert_eq!(x, -5.0..5.0);
        assert!(y.start < 1.0 && y.end > 2.0);
    }

    #[test]
    fn test_empty_figure_has_unit_ranges() {
        let (x, y) = Figure::new("Empty").axis_ranges();
        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn test_render_svg_contains_title_and_legend() {
        let mut figure = sample_figure();
        figure.set_x_ticks(vec![(0.0, "Jan".to_string())]);
        let svg = figure.render_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Sample"));
        assert!(svg.contains("first"));
        assert!(svg.contains("Jan"));
    }
}
