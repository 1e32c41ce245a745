// File: crates/chart-core/src/types.rs
// Summary: Shared constants (canvas size, label placement, endpoint defaults).

/// Reference surface width in pixels.
pub const WIDTH: u32 = 960;
/// Reference surface height in pixels.
pub const HEIGHT: u32 = 350;

/// Horizontal gap between adjacent bars, in pixels.
pub const BAR_GAP_PX: f64 = 1.0;

/// Labels sit this many pixels below the top edge of their bar.
pub const LABEL_OFFSET_PX: f64 = 3.0;
/// Typographic baseline shift applied to labels, in em.
pub const LABEL_DY_EM: f64 = 0.75;
/// Label font size in pixels.
pub const LABEL_FONT_PX: f64 = 10.0;

/// Class of the container element hosting the chart.
pub const CONTAINER_CLASS: &str = "chart";

/// Endpoint path serving the monthly totals.
pub const DEFAULT_PATH: &str = "/total_flights.json";
/// Record field holding the count.
pub const DEFAULT_FIELD: &str = "total_flights";

/// Label placement relative to a bar's group origin and top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub offset_px: f64,
    pub dy_em: f64,
    pub font_px: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self { offset_px: LABEL_OFFSET_PX, dy_em: LABEL_DY_EM, font_px: LABEL_FONT_PX }
    }
}
