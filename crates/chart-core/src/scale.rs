// File: crates/chart-core/src/scale.rs
// Summary: Linear value scale with a fixed pixel range and a once-assigned domain.

use crate::error::{ChartError, Result};

/// Value Y coordinate (e.g., a flight count).
pub type Value = f64;

/// Vertical scale mapping a value domain onto a pixel range.
///
/// The range is fixed at construction. The domain starts unset and may be
/// assigned exactly once, after the data is known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    range_start: f64,
    range_end: f64,
    domain: Option<(Value, Value)>,
}

impl LinearScale {
    pub fn new(range_start: f64, range_end: f64) -> Self {
        Self { range_start, range_end, domain: None }
    }

    /// Inverted vertical scale for a surface of `height` pixels: `[height, 0]`.
    pub fn vertical(height: f64) -> Self {
        Self::new(height, 0.0)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain(&self) -> Option<(Value, Value)> {
        self.domain
    }

    pub fn set_domain(&mut self, lo: Value, hi: Value) -> Result<()> {
        if self.domain.is_some() {
            return Err(ChartError::ScaleDomainAlreadySet);
        }
        self.domain = Some((lo, hi));
        Ok(())
    }

    /// Map `v` from the domain into the range.
    #[inline]
    pub fn apply(&self, v: Value) -> Result<f64> {
        let (lo, hi) = self.domain.ok_or(ChartError::ScaleDomainUnset)?;
        Ok(self.interpolate(lo, hi, v))
    }

    // A zero-width domain collapses onto the range start.
    #[inline]
    fn interpolate(&self, lo: Value, hi: Value, v: Value) -> f64 {
        let span = hi - lo;
        let t = if span != 0.0 { (v - lo) / span } else { 0.0 };
        self.range_start + t * (self.range_end - self.range_start)
    }
}
