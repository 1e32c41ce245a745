// File: crates/chart-cli/src/main.rs
// Summary: Fetches the monthly flight totals once and writes the bar chart as SVG, HTML and/or PNG.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, ValueHint};
use flights_chart_core::types::{DEFAULT_FIELD, DEFAULT_PATH, HEIGHT, WIDTH};
use flights_chart_core::{
    fetch_dataset, load_dataset_file, render, save_html, save_svg, theme, write_svg, Dataset, FetchOptions,
    MalformedPolicy, ParseOptions, RenderOptions, Scene,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render per-period flight totals as an SVG bar chart", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: Source,

    /// Endpoint path, resolved against --url
    #[arg(long, env = "FLIGHTS_CHART_PATH", default_value = DEFAULT_PATH)]
    path: String,

    /// Record field holding the count
    #[arg(long, env = "FLIGHTS_CHART_FIELD", default_value = DEFAULT_FIELD)]
    field: String,

    /// Fail on records without a numeric count instead of skipping them
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Request timeout in seconds
    #[arg(long, env = "FLIGHTS_CHART_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Surface width in pixels
    #[arg(long, default_value_t = WIDTH)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: u32,

    /// Color theme (default, dark, high-contrast)
    #[arg(long, env = "FLIGHTS_CHART_THEME", default_value = "default")]
    theme: String,

    /// Output SVG path (stdout when no output is given)
    #[arg(long, value_hint = ValueHint::FilePath)]
    svg: Option<PathBuf>,

    /// Output standalone HTML page path
    #[arg(long, value_hint = ValueHint::FilePath)]
    html: Option<PathBuf>,

    /// Output PNG path (requires the `png` feature)
    #[arg(long, value_hint = ValueHint::FilePath)]
    png: Option<PathBuf>,

    /// Page title for --html
    #[arg(long, default_value = "Total Flights")]
    title: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

// Presence is checked by `Source::origin` so an exported FLIGHTS_CHART_URL never
// conflicts with an explicit --input.
#[derive(Args, Debug)]
struct Source {
    /// Base URL of the data service, e.g. http://localhost:5000
    #[arg(long, env = "FLIGHTS_CHART_URL", value_hint = ValueHint::Url)]
    url: Option<String>,

    /// Read the JSON payload from a file instead (overrides --url)
    #[arg(long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,
}

/// Where the payload comes from once flags and environment are resolved.
#[derive(Debug, PartialEq)]
enum Origin<'a> {
    File(&'a Path),
    Service(&'a str),
}

impl Source {
    fn origin(&self) -> Result<Origin<'_>> {
        match (&self.input, &self.url) {
            (Some(path), _) => Ok(Origin::File(path)),
            (None, Some(url)) => Ok(Origin::Service(url)),
            (None, None) => anyhow::bail!("either --url or --input is required"),
        }
    }
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let policy = if self.strict { MalformedPolicy::Reject } else { MalformedPolicy::Skip };
        ParseOptions { field: self.field.clone(), policy }
    }

    fn fetch_options(&self, base_url: &str) -> FetchOptions {
        let mut opts = FetchOptions::new(base_url)
            .with_path(self.path.clone())
            .with_parse(self.parse_options());
        if let Some(secs) = self.timeout_secs {
            opts = opts.with_timeout(Duration::from_secs(secs));
        }
        opts
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }

    fn writes_files(&self) -> bool {
        self.svg.is_some() || self.html.is_some() || self.png.is_some()
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn acquire(cli: &Cli) -> Result<Dataset> {
    match cli.source.origin()? {
        Origin::File(path) => load_dataset_file(path, &cli.parse_options())
            .with_context(|| format!("failed to load dataset '{}'", path.display())),
        Origin::Service(url) => {
            let opts = cli.fetch_options(url);
            fetch_dataset(&opts)
                .await
                .with_context(|| format!("failed to fetch dataset from {}{}", url, opts.path))
        }
    }
}

fn summarize(dataset: &Dataset, scene: &Scene) {
    let Some(max) = scene.max_value else {
        warn!("dataset is empty; wrote an empty chart surface");
        return;
    };
    let peaks: Vec<String> = scene
        .highlighted()
        .map(|g| {
            dataset.records()[g.index]
                .period_label()
                .unwrap_or_else(|| format!("#{}", g.index))
        })
        .collect();
    info!(
        bars = scene.groups.len(),
        skipped = dataset.skipped().len(),
        max = %max,
        peaks = %peaks.join(","),
        "chart rendered"
    );
}

#[cfg(feature = "png")]
fn write_png(scene: &Scene, path: &Path) -> Result<()> {
    flights_chart_skia::render_to_png(scene, path)
}

#[cfg(not(feature = "png"))]
fn write_png(_scene: &Scene, path: &Path) -> Result<()> {
    anyhow::bail!("cannot write {}: PNG output requires building with --features png", path.display())
}

fn write_outputs(cli: &Cli, scene: &Scene) -> Result<()> {
    if !cli.writes_files() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(write_svg(scene).as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    if let Some(path) = &cli.svg {
        save_svg(scene, path).with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &cli.html {
        save_html(scene, &cli.title, path).with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &cli.png {
        write_png(scene, path)?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let dataset = acquire(&cli).await?;
    let scene = render(&dataset, &cli.render_options()).context("render pipeline failed")?;
    write_outputs(&cli, &scene)?;
    summarize(&dataset, &scene);
    Ok(())
}
