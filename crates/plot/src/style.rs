//! Built-in chart styles.
//!
//! A style only changes presentation: colors, fonts, grid and line weight.
//! Series colors come from the plot configuration.

use serde::Serialize;
use trend_core::{Error, Result};

/// Visual theme applied when rendering a figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    /// Registered name.
    pub name: &'static str,
    /// Fill behind the whole figure.
    pub figure_background: &'static str,
    /// Fill of the plotting area.
    pub axes_background: &'static str,
    /// Grid line color, `None` for no grid.
    pub grid_color: Option<&'static str>,
    /// Title, label and tick text color.
    pub text_color: &'static str,
    /// Axis frame color.
    pub axis_color: &'static str,
    pub font_family: &'static str,
    pub title_size: u32,
    pub label_size: u32,
    pub tick_size: u32,
    /// Stroke width of data series.
    pub line_width: f64,
}

pub const FIVETHIRTYEIGHT: Style = Style {
    name: "fivethirtyeight",
    figure_background: "#f0f0f0",
    axes_background: "#f0f0f0",
    grid_color: Some("#cbcbcb"),
    text_color: "#222222",
    axis_color: "#f0f0f0",
    font_family: "DejaVu Sans, Helvetica, Arial, sans-serif",
    title_size: 22,
    label_size: 16,
    tick_size: 14,
    line_width: 4.0,
};

pub const GGPLOT: Style = Style {
    name: "ggplot",
    figure_background: "#ffffff",
    axes_background: "#e5e5e5",
    grid_color: Some("#ffffff"),
    text_color: "#555555",
    axis_color: "#ffffff",
    font_family: "DejaVu Sans, Helvetica, Arial, sans-serif",
    title_size: 17,
    label_size: 14,
    tick_size: 12,
    line_width: 1.5,
};

pub const CLASSIC: Style = Style {
    name: "classic",
    figure_background: "#ffffff",
    axes_background: "#ffffff",
    grid_color: None,
    text_color: "#000000",
    axis_color: "#000000",
    font_family: "DejaVu Sans, Helvetica, Arial, sans-serif",
    title_size: 14,
    label_size: 12,
    tick_size: 12,
    line_width: 1.0,
};

pub const DARK_BACKGROUND: Style = Style {
    name: "dark_background",
    figure_background: "#000000",
    axes_background: "#000000",
    grid_color: None,
    text_color: "#ffffff",
    axis_color: "#ffffff",
    font_family: "DejaVu Sans, Helvetica, Arial, sans-serif",
    title_size: 14,
    label_size: 12,
    tick_size: 12,
    line_width: 1.5,
};

pub const SEABORN: Style = Style {
    name: "seaborn",
    figure_background: "#ffffff",
    axes_background: "#eaeaf2",
    grid_color: Some("#ffffff"),
    text_color: "#262626",
    axis_color: "#ffffff",
    font_family: "Arial, DejaVu Sans, Liberation Sans, sans-serif",
    title_size: 14,
    label_size: 13,
    tick_size: 12,
    line_width: 1.75,
};

const BUILTIN: [&Style; 5] = [&FIVETHIRTYEIGHT, &GGPLOT, &CLASSIC, &DARK_BACKGROUND, &SEABORN];

impl Style {
    /// Look up a built-in style by name (case-insensitive).
    pub fn named(name: &str) -> Result<Style> {
        let wanted = name.trim();
        BUILTIN
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(wanted))
            .map(|s| (*s).clone())
            .ok_or_else(|| {
                Error::config(format!(
                    "unknown style {name:?}; available styles: {:?}",
                    Self::available()
                ))
            })
    }

    /// Names of the built-in styles.
    pub fn available() -> Vec<&'static str> {
        BUILTIN.iter().map(|s| s.name).collect()
    }
}

impl Default for Style {
    fn default() -> Self {
        FIVETHIRTYEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup() {
        assert_eq!(Style::named("ggplot").unwrap(), GGPLOT);
        assert_eq!(Style::named(" FiveThirtyEight ").unwrap().name, "fivethirtyeight");
    }

    #[test]
    fn test_unknown_style_lists_available() {
        let err = Style::named("solarized").unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, Error::Config(_)));
        for name in Style::available() {
            assert!(msg.contains(name));
        }
    }

    #[test]
    fn test_default_is_fivethirtyeight() {
        assert_eq!(Style::default().name, trend_core::config::DEFAULT_STYLE);
    }
}
