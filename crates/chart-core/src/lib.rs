// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports dataset acquisition, bar render pipeline and SVG output.

pub mod chart;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{render, Canvas, RenderOptions};
pub use dataset::{Dataset, MalformedPolicy, ParseOptions, Record};
pub use error::ChartError;
pub use fetch::{fetch_dataset, load_dataset_file, FetchOptions};
pub use scale::LinearScale;
pub use scene::{BarGroup, BarLabel, BarRect, Scene};
pub use svg::{save_html, save_svg, write_html, write_svg};
pub use theme::{Color, Theme};
