// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless PNG/RGBA rasterization of a bar scene using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{anyhow, Result};
use flights_chart_core::{Color, Scene};
use skia_safe as skia;
use tracing::debug;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Draw `scene` onto a fresh raster surface of the scene's size.
fn rasterize(scene: &Scene) -> Result<skia::Image> {
    let (w, h) = (scene.width as i32, scene.height as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(scene.background.map(to_skia).unwrap_or(skia::Color::TRANSPARENT));

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let mut text_paint = skia::Paint::default();
    text_paint.set_anti_alias(true);
    text_paint.set_color(to_skia(scene.label_color));
    let mut font = skia::Font::default();
    font.set_size(scene.label_font_px as f32);

    for g in &scene.groups {
        let ox = g.offset_x as f32;
        body.set_color(to_skia(g.rect.fill));
        let rect = skia::Rect::from_xywh(ox, g.rect.y as f32, g.rect.width as f32, g.rect.height as f32);
        canvas.draw_rect(rect, &body);

        // SVG semantics: `y` is the baseline before the em shift; anchor is the middle.
        let (advance, _) = font.measure_str(&g.label.text, Some(&text_paint));
        let baseline = g.label.y + g.label.dy_em * scene.label_font_px;
        canvas.draw_str(
            &g.label.text,
            (ox + g.label.x as f32 - advance * 0.5, baseline as f32),
            &font,
            &text_paint,
        );
    }
    debug!(bars = scene.groups.len(), "rasterized scene");
    Ok(surface.image_snapshot())
}

/// Encode `scene` as PNG bytes.
pub fn render_to_png_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let image = rasterize(scene)?;
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `scene` to a PNG file, creating parent directories as needed.
pub fn render_to_png(scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_to_png_bytes(scene)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
    let image = rasterize(scene)?;
    let (w, h) = (image.width(), image.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    if !image.read_pixels(&info, &mut px, stride, (0, 0), skia::image::CachingHint::Allow) {
        return Err(anyhow!("read_pixels failed"));
    }
    Ok((px, w as u32, h as u32, stride))
}
