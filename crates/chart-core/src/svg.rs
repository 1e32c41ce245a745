// File: crates/chart-core/src/svg.rs
// Summary: SVG and standalone HTML serialization of a bar scene.

use std::fmt::Write as _;
use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::Result;
use crate::scene::Scene;

/// Serialize `scene` as an SVG document rooted at `<svg class="...">`.
///
/// One `<g transform="translate(x,0)">` per bar, each holding a `<rect>` then a `<text>`.
pub fn write_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(256 + scene.groups.len() * 192);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" width="{}" height="{}" font-family="sans-serif" font-size="{}" text-anchor="middle">"#,
        encode_double_quoted_attribute(&scene.container_class),
        scene.width,
        scene.height,
        scene.label_font_px,
    );
    out.push('\n');

    if let Some(bg) = scene.background {
        let _ = writeln!(out, r#"  <rect class="background" width="{}" height="{}" fill="{}"/>"#, scene.width, scene.height, bg);
    }

    for g in &scene.groups {
        let _ = writeln!(out, r#"  <g transform="translate({},0)">"#, g.offset_x);
        let _ = writeln!(
            out,
            r#"    <rect y="{}" height="{}" width="{}" fill="{}"/>"#,
            g.rect.y, g.rect.height, g.rect.width, g.rect.fill,
        );
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" dy="{}em" fill="{}">{}</text>"#,
            g.label.x,
            g.label.y,
            g.label.dy_em,
            scene.label_color,
            encode_text(&g.label.text),
        );
        out.push_str("  </g>\n");
    }
    out.push_str("</svg>\n");
    out
}

/// Wrap the SVG in a minimal HTML page so it can be opened directly in a browser.
pub fn write_html(scene: &Scene, title: &str) -> String {
    let class = encode_text(&scene.container_class);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", encode_text(title));
    let _ = writeln!(
        out,
        "<style>\n.{class} text {{ fill: {}; font: {}px sans-serif; text-anchor: middle; }}\n</style>",
        scene.label_color, scene.label_font_px,
    );
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", encode_text(title));
    out.push_str(&write_svg(scene));
    out.push_str("</body>\n</html>\n");
    out
}

pub fn save_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &write_svg(scene))
}

pub fn save_html(scene: &Scene, title: &str, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &write_html(scene, title))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
