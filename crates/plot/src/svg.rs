//! SVG rendering of figures.

use crate::chart::Figure;
use crate::style::Style;

const MARGIN_LEFT: f64 = 96.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 72.0;
const MARGIN_BOTTOM: f64 = 84.0;

/// Number of intervals between y-axis ticks.
const Y_TICKS: usize = 5;

/// Pixel rectangle of the plotting area and its data mapping.
struct PlotArea {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotArea {
    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center of the `index`-th of `n` categorical slots.
    fn x(&self, index: usize, n: usize) -> f64 {
        if n == 0 {
            return self.left + self.width() / 2.0;
        }
        self.left + self.width() * (index as f64 + 0.5) / n as f64
    }

    fn y(&self, value: f64) -> f64 {
        self.bottom - (value - self.y_min) / (self.y_max - self.y_min) * self.height()
    }

    fn contains_y(&self, value: f64) -> bool {
        value >= self.y_min && value <= self.y_max
    }
}

/// Escape text for use in SVG content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a figure as a standalone SVG document.
pub fn render_svg(figure: &Figure, style: &Style) -> String {
    let width = f64::from(figure.width);
    let height = f64::from(figure.height);
    let (y_min, y_max) = figure.y_bounds();
    let area = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        right: (width - MARGIN_RIGHT).max(MARGIN_LEFT + 1.0),
        bottom: (height - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0),
        y_min,
        y_max,
    };
    let n = figure.categories.len();

    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = figure.width,
        h = figure.height,
        font = escape_xml(style.font_family),
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        style.figure_background,
        w = figure.width,
        h = figure.height,
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}"/>"#,
        area.left,
        area.top,
        area.width(),
        area.height(),
        style.axes_background,
        style.axis_color,
    ));
    out.push('\n');

    // y ticks and horizontal grid
    for i in 0..=Y_TICKS {
        let value = y_min + (y_max - y_min) * i as f64 / Y_TICKS as f64;
        let py = area.y(value);
        if let Some(grid) = style.grid_color {
            out.push_str(&format!(
                r#"<line class="grid" x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}" stroke="{grid}" stroke-width="1"/>"#,
                area.left, area.right,
            ));
            out.push('\n');
        }
        out.push_str(&format!(
            r#"<text class="ytick" x="{:.1}" y="{:.1}" text-anchor="end" font-size="{}" fill="{}">{value:.2}</text>"#,
            area.left - 10.0,
            py + f64::from(style.tick_size) / 3.0,
            style.tick_size,
            style.text_color,
        ));
        out.push('\n');
    }

    // x ticks and vertical grid
    for (i, category) in figure.categories.iter().enumerate() {
        let px = area.x(i, n);
        if let Some(grid) = style.grid_color {
            out.push_str(&format!(
                r#"<line class="grid" x1="{px:.1}" y1="{:.1}" x2="{px:.1}" y2="{:.1}" stroke="{grid}" stroke-width="1"/>"#,
                area.top, area.bottom,
            ));
            out.push('\n');
        }
        out.push_str(&format!(
            r#"<text class="xtick" x="{px:.1}" y="{:.1}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
            area.bottom + f64::from(style.tick_size) + 8.0,
            style.tick_size,
            style.text_color,
            escape_xml(category),
        ));
        out.push('\n');
    }

    let reference = &figure.reference;
    if area.contains_y(reference.y) {
        let py = area.y(reference.y);
        let dash = if reference.dashed {
            r#" stroke-dasharray="6,4""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<line class="reference" x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}" stroke="{}" stroke-width="{}"{dash}/>"#,
            area.left,
            area.right,
            escape_xml(&reference.color),
            reference.width,
        ));
        out.push('\n');
    }

    for series in &figure.series {
        render_series(&mut out, &area, n, series.values.as_slice(), &series.color, style);
    }

    render_legend(&mut out, &area, figure, style);

    // title and axis labels
    out.push_str(&format!(
        r#"<text class="title" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
        width / 2.0,
        MARGIN_TOP / 2.0 + f64::from(style.title_size) / 3.0,
        style.title_size,
        style.text_color,
        escape_xml(&figure.title),
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<text class="xlabel" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
        area.left + area.width() / 2.0,
        height - 20.0,
        style.label_size,
        style.text_color,
        escape_xml(&figure.x_label),
    ));
    out.push('\n');
    let label_y = area.top + area.height() / 2.0;
    out.push_str(&format!(
        r#"<text class="ylabel" x="24" y="{label_y:.1}" text-anchor="middle" font-size="{}" fill="{}" transform="rotate(-90 24 {label_y:.1})">{}</text>"#,
        style.label_size,
        style.text_color,
        escape_xml(&figure.y_label),
    ));
    out.push_str("\n</svg>\n");
    out
}

/// Draw one series; `NaN` values break the line.
fn render_series(out: &mut String, area: &PlotArea, n: usize, values: &[f64], color: &str, style: &Style) {
    let color = escape_xml(color);
    let mut segment: Vec<(f64, f64)> = Vec::new();

    for (i, &value) in values.iter().enumerate().take(n) {
        if value.is_finite() {
            segment.push((area.x(i, n), area.y(value)));
        } else {
            flush_segment(out, &mut segment, &color, style);
        }
    }
    flush_segment(out, &mut segment, &color, style);
}

/// Emit a polyline (or a lone marker) for the pending points.
fn flush_segment(out: &mut String, segment: &mut Vec<(f64, f64)>, color: &str, style: &Style) {
    match segment.as_slice() {
        [] => return,
        [(x, y)] => {
            out.push_str(&format!(
                r#"<circle class="series" cx="{x:.1}" cy="{y:.1}" r="{:.1}" fill="{color}"/>"#,
                style.line_width.max(2.0),
            ));
        }
        points => {
            let points: Vec<String> = points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
            out.push_str(&format!(
                r#"<polyline class="series" points="{}" fill="none" stroke="{color}" stroke-width="{}" stroke-linejoin="round"/>"#,
                points.join(" "),
                style.line_width,
            ));
        }
    }
    out.push('\n');
    segment.clear();
}

fn render_legend(out: &mut String, area: &PlotArea, figure: &Figure, style: &Style) {
    if figure.series.is_empty() {
        return;
    }

    let row_height = f64::from(style.tick_size) + 10.0;
    let box_width = 260.0;
    let x = area.right - box_width - 12.0;
    let mut y = area.top + 12.0;

    out.push_str(&format!(
        r#"<rect class="legend" x="{x:.1}" y="{y:.1}" width="{box_width:.1}" height="{:.1}" fill="{}" fill-opacity="0.8" stroke="{}"/>"#,
        row_height * figure.series.len() as f64 + 8.0,
        style.axes_background,
        style.axis_color,
    ));
    out.push('\n');

    for series in &figure.series {
        y += row_height;
        out.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{}"/>"#,
            x + 10.0,
            y - row_height / 3.0,
            x + 40.0,
            y - row_height / 3.0,
            escape_xml(&series.color),
            style.line_width,
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{y:.1}" font-size="{}" fill="{}">{}</text>"#,
            x + 48.0,
            style.tick_size,
            style.text_color,
            escape_xml(&series.label),
        ));
        out.push('\n');
    }
}
