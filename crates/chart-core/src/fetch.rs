// File: crates/chart-core/src/fetch.rs
// Summary: Data acquisition: one asynchronous GET of the JSON endpoint, or a local file read.

use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info};

use crate::dataset::{Dataset, ParseOptions};
use crate::error::{ChartError, Result};
use crate::types::DEFAULT_PATH;

#[derive(Clone, Debug)]
pub struct FetchOptions {
    /// Scheme and authority of the data service, e.g. `http://localhost:5000`.
    pub base_url: String,
    pub path: String,
    /// Overall request timeout; expiry is reported as a transport failure.
    pub timeout: Option<Duration>,
    pub parse: ParseOptions,
}

impl FetchOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: DEFAULT_PATH.to_string(),
            timeout: None,
            parse: ParseOptions::default(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_parse(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Resolve `path` against `base_url`.
    pub fn endpoint(&self) -> Result<Url> {
        let invalid = |reason: String| ChartError::InvalidUrl { url: format!("{}{}", self.base_url, self.path), reason };
        let base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        base.join(&self.path).map_err(|e| invalid(e.to_string()))
    }
}

/// Issue exactly one GET for the dataset. No retry; any failure is returned.
pub async fn fetch_dataset(opts: &FetchOptions) -> Result<Dataset> {
    let url = opts.endpoint()?;
    let mut builder = reqwest::Client::builder();
    if let Some(t) = opts.timeout {
        builder = builder.timeout(t);
    }
    let client = builder.build()?;

    debug!(%url, "fetching dataset");
    let resp = client.get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ChartError::Status { url: url.to_string(), status: status.as_u16() });
    }
    let body = resp.bytes().await?;
    let dataset = Dataset::from_json_slice(&body, &opts.parse)?;
    info!(%url, records = dataset.len(), bytes = body.len(), "dataset fetched");
    Ok(dataset)
}

/// Read the same payload from disk.
pub fn load_dataset_file(path: impl AsRef<Path>, parse: &ParseOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let dataset = Dataset::from_json_slice(&bytes, parse)?;
    info!(path = %path.display(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let o = FetchOptions::new("http://localhost:5000");
        assert_eq!(o.endpoint().unwrap().as_str(), "http://localhost:5000/total_flights.json");

        let o = FetchOptions::new("http://example.org/app/").with_path("top_routes.json");
        assert_eq!(o.endpoint().unwrap().as_str(), "http://example.org/app/top_routes.json");
    }

    #[test]
    fn bad_base_url_is_reported() {
        let err = FetchOptions::new("not a url").endpoint().unwrap_err();
        assert!(matches!(err, ChartError::InvalidUrl { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dataset_file("definitely/not/here.json", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }
}
