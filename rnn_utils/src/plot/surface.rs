//! Display surfaces that present finished figures

use super::figure::Figure;
use crate::error::Result;
use std::io::{self, Write};
use tracing::debug;

/// Something that can show a figure to the user
pub trait Surface {
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

/// Renders figures as SVG documents into a writer, one document per figure
#[derive(Debug)]
pub struct SvgSurface<W: Write> {
    writer: W,
}

impl SvgSurface<io::Stdout> {
    /// Write figures to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SvgSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for SvgSurface<W> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let svg = figure.render_svg()?;
        self.writer.write_all(svg.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        debug!(title = figure.title(), bytes = svg.len(), "presented figure");
        Ok(())
    }
}

/// Keeps presented figures in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    figures: Vec<Figure>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Figures in the order they were shown
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
