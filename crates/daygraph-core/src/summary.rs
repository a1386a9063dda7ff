// File: crates/daygraph-core/src/summary.rs
// Summary: Generic field aggregation bound to host-page element ids.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DatasetError;
use crate::record::Record;

/// How a bound field is reduced across the rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reduce {
    /// Number of rows; field-independent.
    Count,
    /// Sum of the named field over the rows that have it.
    Sum(String),
    /// The named field of the last row.
    Last(String),
}

/// One summary binding: which element the reduced value is written into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub reduce: Reduce,
}

impl Binding {
    pub fn new(element_id: impl Into<String>, reduce: Reduce) -> Self {
        Self { element_id: element_id.into(), reduce }
    }
}

/// A resolved label: the element id and the text written into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub element_id: String,
    pub text: String,
}

/// Row types that expose named numeric fields.
pub trait FieldSource {
    fn count_field(&self, key: &str) -> Option<u64>;
}

impl FieldSource for Record {
    fn count_field(&self, key: &str) -> Option<u64> {
        match key {
            "article" => Some(self.article),
            "text" => Some(self.text),
            "code" => Some(self.code),
            "total" => Some(self.total),
            "todo" => self.todo,
            _ => None,
        }
    }
}

/// One row of a free-form stats export. Values are coerced to counts at
/// access time; non-numeric fields are simply not bindable.
#[derive(Clone, Debug, Deserialize)]
pub struct StatRow(pub Map<String, Value>);

impl FieldSource for StatRow {
    fn count_field(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Parse a JSON array of free-form stat rows.
pub fn stat_rows_from_json_str(json: &str) -> Result<Vec<StatRow>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// One-shot read of a stats JSON file.
pub fn stat_rows_from_json_file(path: impl AsRef<Path>) -> Result<Vec<StatRow>, DatasetError> {
    let raw = fs::read_to_string(path)?;
    stat_rows_from_json_str(&raw)
}

/// Resolve `bindings` against `rows`, in binding order.
///
/// A binding whose field is absent from every row is dropped rather than
/// rendered as zero; that is how optional fields degrade.
pub fn bind_summary<R: FieldSource>(rows: &[R], bindings: &[Binding]) -> Vec<Label> {
    let mut labels = Vec::with_capacity(bindings.len());
    for binding in bindings {
        let value = match &binding.reduce {
            Reduce::Count => Some(rows.len() as u64),
            Reduce::Sum(key) => {
                let mut seen = false;
                let mut sum = 0u64;
                for r in rows {
                    if let Some(v) = r.count_field(key) {
                        seen = true;
                        sum += v;
                    }
                }
                if seen { Some(sum) } else { None }
            }
            Reduce::Last(key) => rows.last().and_then(|r| r.count_field(key)),
        };
        if let Some(v) = value {
            labels.push(Label { element_id: binding.element_id.clone(), text: v.to_string() });
        }
    }
    labels
}

/// Bindings for the per-day dashboard labels: the latest record's counts.
pub fn dashboard_bindings() -> Vec<Binding> {
    vec![
        Binding::new("article", Reduce::Last("article".into())),
        Binding::new("text", Reduce::Last("text".into())),
        Binding::new("code", Reduce::Last("code".into())),
        Binding::new("total", Reduce::Last("total".into())),
        Binding::new("todo", Reduce::Last("todo".into())),
    ]
}

/// Bindings for the admin overview: row count plus whole-table sums.
pub fn admin_bindings() -> Vec<Binding> {
    vec![
        Binding::new("total-users", Reduce::Count),
        Binding::new("total-projects", Reduce::Sum("total".into())),
        Binding::new("total-todo", Reduce::Sum("todo".into())),
    ]
}
