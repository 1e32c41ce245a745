// File: crates/chart-core/src/dataset.rs
// Summary: Record/Dataset model and JSON payload parsing (plain or Mongo extended JSON numbers).
// Notes:
// - Labels print the parsed count the way a JavaScript number prints
//   (`12.0` -> "12", `1e3` -> "1000"), whatever spelling the payload used.
// - Malformed records are dropped or rejected per `MalformedPolicy`; they never
//   reach the render pipeline.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::types::DEFAULT_FIELD;

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub count: f64,
    /// Textual form of the count, see `number_label`.
    pub label: String,
    /// First day of the record's month, when the payload carries `Year`/`Month`.
    pub period: Option<NaiveDate>,
}

impl Record {
    pub fn new(count: f64) -> Self {
        Self { count, label: number_label(count), period: None }
    }

    pub fn with_period(mut self, year: i32, month: u32) -> Self {
        self.period = NaiveDate::from_ymd_opt(year, month, 1);
        self
    }

    /// `YYYY-MM` when a period is known.
    pub fn period_label(&self) -> Option<String> {
        self.period.map(|d| d.format("%Y-%m").to_string())
    }
}

/// What to do with a record whose count is missing or not a finite number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Drop the record and log its index.
    #[default]
    Skip,
    /// Fail the whole parse.
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name of the numeric count field.
    pub field: String,
    pub policy: MalformedPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { field: DEFAULT_FIELD.to_string(), policy: MalformedPolicy::default() }
    }
}

/// Ordered, immutable sequence of records; order is presentation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    skipped: Vec<usize>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records, skipped: Vec::new() }
    }

    pub fn from_counts(counts: &[f64]) -> Self {
        Self::from_records(counts.iter().copied().map(Record::new).collect())
    }

    pub fn from_json_str(s: &str, opts: &ParseOptions) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json_value(&value, opts)
    }

    pub fn from_json_slice(bytes: &[u8], opts: &ParseOptions) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json_value(&value, opts)
    }

    pub fn from_json_value(value: &Value, opts: &ParseOptions) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or(ChartError::InvalidPayload { found: json_kind(value) })?;

        let mut records = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match parse_record(item, &opts.field) {
                Some(r) => records.push(r),
                None => match opts.policy {
                    MalformedPolicy::Reject => {
                        return Err(ChartError::MalformedRecord { index, field: opts.field.clone() });
                    }
                    MalformedPolicy::Skip => {
                        warn!(index, field = %opts.field, "skipping record without a numeric count");
                        skipped.push(index);
                    }
                },
            }
        }
        debug!(records = records.len(), skipped = skipped.len(), "parsed dataset");
        Ok(Self { records, skipped })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Payload indices of records dropped under `MalformedPolicy::Skip`.
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    /// Largest count, or `None` for an empty dataset.
    pub fn max_count(&self) -> Option<f64> {
        self.records.iter().map(|r| r.count).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn parse_record(item: &Value, field: &str) -> Option<Record> {
    let obj = item.as_object()?;
    let count = finite_number(obj.get(field)?)?;
    let period = period_of(obj);
    Some(Record { count, label: number_label(count), period })
}

fn period_of(obj: &Map<String, Value>) -> Option<NaiveDate> {
    let year = obj.get("Year").and_then(finite_number)?;
    let month = obj.get("Month").and_then(finite_number)?;
    if year.fract() != 0.0 || month.fract() != 0.0 || month < 1.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month as u32, 1)
}

/// Read a finite number from either a JSON number or a Mongo extended-JSON
/// wrapper (`{"$numberInt": "42"}` and friends).
fn finite_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::Object(o) if o.len() == 1 => {
            let (k, inner) = o.iter().next()?;
            if !matches!(k.as_str(), "$numberInt" | "$numberLong" | "$numberDouble") {
                return None;
            }
            inner.as_str()?.trim().parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Shortest round-trip decimal with no trailing `.0`, switching to exponent
/// form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)` like JavaScript's `String(n)`.
pub(crate) fn number_label(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.0 too.
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
