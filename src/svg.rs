//! SVG visualization of a computed grid.
//!
//! Draws the container outline, every placement as a numbered cell, and the
//! scale of each row in the right margin. Everything is shrunk to a fixed
//! panel width so large containers stay readable.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridConfig, ImageDescriptor, layout, svg::render_grid_svg};
//!
//! let images = (0..7).map(|i| ImageDescriptor::new(400.0 + 80.0 * i as f64, 300.0, i));
//! let grid = layout(images, 1200.0, &GridConfig::new()).unwrap();
//!
//! let svg = render_grid_svg(&grid);
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::emit::GridLayout;

/// Width the container is scaled to in the output.
const PANEL_W: f64 = 480.0;
/// Horizontal margin left of the panel.
const MARGIN_X: f64 = 20.0;
/// Space right of the panel for row annotations.
const ANNOTATION_W: f64 = 90.0;
/// Top margin, holding the title.
const MARGIN_TOP: f64 = 36.0;
/// Bottom margin.
const MARGIN_BOTTOM: f64 = 20.0;

/// Render a complete SVG document for `grid`.
pub fn render_grid_svg<R>(grid: &GridLayout<R>) -> String {
    if grid.is_empty() || grid.container_width <= 0.0 {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let scale = PANEL_W / grid.container_width;
    let panel_h = grid.total_height * scale;
    let total_w = MARGIN_X + PANEL_W + ANNOTATION_W;
    let total_h = MARGIN_TOP + panel_h + MARGIN_BOTTOM;

    let mut svg = String::with_capacity(1024 + 160 * grid.placements.len());

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .index { font-size: 10px; fill: #fff; }
  .outer { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .cell { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { stroke: #555; }
    .cell { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<text x="{}" y="22" class="label">{}</text>"#,
        MARGIN_X,
        escape_xml(&format!(
            "Grid  {}×{}  {} images, {} rows",
            fmt_px(grid.container_width),
            fmt_px(grid.total_height),
            grid.placements.len(),
            grid.rows.len()
        ))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer"/>"#,
        MARGIN_X, MARGIN_TOP, PANEL_W, panel_h
    ));
    svg.push('\n');

    for (i, p) in grid.placements.iter().enumerate() {
        let x = MARGIN_X + p.left * scale;
        let y = MARGIN_TOP + p.top * scale;
        let w = p.width * scale;
        let h = p.height * scale;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="cell" rx="1"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index">{}</text>"#,
            x + 3.0,
            y + 12.0,
            i
        ));
        svg.push('\n');
    }

    for row in &grid.rows {
        let y = MARGIN_TOP + (row.top + row.height / 2.0) * scale;
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="annotation">×{:.3}</text>"#,
            MARGIN_X + PANEL_W + 8.0,
            y + 4.0,
            row.scale
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Format a pixel value without a trailing `.0` for whole numbers.
fn fmt_px(v: f64) -> String {
    if v == (v as i64) as f64 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
