//! Explicit rendering context.
//!
//! Holds the active style and every figure produced so far. Each caller owns
//! its context, so separate calls never share plotting state.

use std::path::{Path, PathBuf};
use trend_core::config::PlotConfig;
use trend_core::Result;

use crate::chart::Figure;
use crate::style::Style;

/// Style plus the figures drawn into it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    style: Style,
    config: PlotConfig,
    figures: Vec<Figure>,
}

impl RenderContext {
    /// Context with a named style and default chart settings.
    ///
    /// Fails with a configuration error for an unknown style.
    pub fn new(style: &str) -> Result<Self> {
        Self::from_config(PlotConfig {
            style: style.to_string(),
            ..PlotConfig::default()
        })
    }

    /// Context from a full chart configuration.
    pub fn from_config(config: PlotConfig) -> Result<Self> {
        let style = Style::named(&config.style)?;
        Ok(Self {
            style,
            config,
            figures: Vec::new(),
        })
    }

    /// Active style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Chart settings.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Add a figure.
    pub fn push_figure(&mut self, figure: Figure) {
        tracing::debug!(title = %figure.title, points = figure.categories.len(), "figure added");
        self.figures.push(figure);
    }

    /// Figures in creation order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Remove and return all figures.
    pub fn take_figures(&mut self) -> Vec<Figure> {
        std::mem::take(&mut self.figures)
    }

    /// Render every figure to SVG.
    pub fn render_svgs(&self) -> Vec<String> {
        self.figures.iter().map(|f| f.to_svg(&self.style)).collect()
    }

    /// Write every figure to `dir` as `{stem}_{n}.svg`, numbered from 1.
    pub fn save_all(&self, dir: impl AsRef<Path>, stem: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut paths = Vec::with_capacity(self.figures.len());
        for (i, figure) in self.figures.iter().enumerate() {
            let path = dir.join(format!("{stem}_{}.svg", i + 1));
            figure.save_svg(&path, &self.style)?;
            paths.push(path);
        }
        tracing::info!(dir = %dir.display(), figures = paths.len(), "saved figures");
        Ok(paths)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            style: Style::default(),
            config: PlotConfig::default(),
            figures: Vec::new(),
        }
    }
}
