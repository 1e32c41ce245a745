// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic scene produced by the bar pipeline (groups, rects, labels).

use crate::theme::Color;

/// Filled rectangle, relative to its group origin.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub highlighted: bool,
}

/// Text label, relative to its group origin.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLabel {
    pub x: f64,
    pub y: f64,
    /// Baseline shift in em.
    pub dy_em: f64,
    pub text: String,
}

/// One record's visual: a group translated by `offset_x` holding one rect and one label.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub index: usize,
    pub offset_x: f64,
    pub rect: BarRect,
    pub label: BarLabel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub container_class: String,
    pub background: Option<Color>,
    pub label_color: Color,
    pub label_font_px: f64,
    /// Dataset maximum; `None` when nothing was drawn.
    pub max_value: Option<f64>,
    pub bar_width: Option<f64>,
    pub groups: Vec<BarGroup>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &BarGroup> {
        self.groups.iter().filter(|g| g.rect.highlighted)
    }
}
