// File: crates/chart-core/src/chart.rs
// Summary: Canvas setup and the one-shot bar render pipeline (domain, color, geometry, labels).

use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::scale::LinearScale;
use crate::scene::{BarGroup, BarLabel, BarRect, Scene};
use crate::theme::Theme;
use crate::types::{LabelStyle, BAR_GAP_PX, CONTAINER_CLASS, HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    pub labels: LabelStyle,
    pub container_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            labels: LabelStyle::default(),
            container_class: CONTAINER_CLASS.to_string(),
        }
    }
}

/// Render context: a fixed-size surface and its vertical scale.
///
/// The scale's range is `[height, 0]`; its domain is assigned by [`Canvas::render`].
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    scale: LinearScale,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, scale: LinearScale::vertical(height as f64) }
    }

    pub fn from_options(opts: &RenderOptions) -> Self {
        Self::new(opts.width, opts.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    /// Run the pipeline once over `dataset`, consuming the canvas.
    ///
    /// An empty dataset yields an empty scene and leaves the domain unset.
    pub fn render(mut self, dataset: &Dataset, opts: &RenderOptions) -> Result<Scene> {
        let mut scene = Scene {
            width: self.width,
            height: self.height,
            container_class: opts.container_class.clone(),
            background: opts.theme.background,
            label_color: opts.theme.label,
            label_font_px: opts.labels.font_px,
            max_value: None,
            bar_width: None,
            groups: Vec::with_capacity(dataset.len()),
        };

        let Some(max_value) = dataset.max_count() else {
            warn!("empty dataset; rendering an empty chart");
            return Ok(scene);
        };
        self.scale.set_domain(0.0, max_value)?;

        let height = self.height as f64;
        let bar_width = self.width as f64 / dataset.len() as f64;
        debug!(bars = dataset.len(), max_value, bar_width, "render pipeline");

        for (i, record) in dataset.iter().enumerate() {
            let y = self.scale.apply(record.count)?;
            let highlighted = record.count == max_value;
            scene.groups.push(BarGroup {
                index: i,
                offset_x: i as f64 * bar_width,
                rect: BarRect {
                    y,
                    // More records than pixels: SVG rejects negative widths.
                    width: (bar_width - BAR_GAP_PX).max(0.0),
                    height: height - y,
                    fill: opts.theme.fill_for(highlighted),
                    highlighted,
                },
                label: BarLabel {
                    x: bar_width / 2.0,
                    y: y + opts.labels.offset_px,
                    dy_em: opts.labels.dy_em,
                    text: record.label.clone(),
                },
            });
        }

        scene.max_value = Some(max_value);
        scene.bar_width = Some(bar_width);
        Ok(scene)
    }
}

/// Set up a canvas from `opts` and render `dataset` into a scene.
pub fn render(dataset: &Dataset, opts: &RenderOptions) -> Result<Scene> {
    Canvas::from_options(opts).render(dataset, opts)
}
