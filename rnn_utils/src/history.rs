//! Per-epoch training metrics
//!
//! Training frameworks report their metrics in different shapes: a plain
//! mapping, a result object carrying one, a JSON dump or a CSV log. All of them
//! are converted once into a [`History`] before anything is plotted.

use crate::error::{Result, RnnUtilsError};
use serde_json::{Map, Value};
use std::fmt;
use std::io::Read;
use std::path::Path;

const VALIDATION_PREFIX: &str = "val_";

/// Whether a metric was measured on training or validation data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Training,
    Validation,
}

impl Phase {
    /// Human readable label used in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Training => "Training",
            Phase::Validation => "Validation",
        }
    }
}

/// Metrics known to the display table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Loss,
    Accuracy,
    Mse,
    Recall,
}

/// Raw metric names and the metric they display as.
const METRIC_NAMES: &[(&str, Metric)] = &[
    ("loss", Metric::Loss),
    ("acc", Metric::Accuracy),
    ("accuracy", Metric::Accuracy),
    ("mse", Metric::Mse),
    ("recall", Metric::Recall),
];

impl Metric {
    /// Look up a raw metric name (without the `val_` prefix)
    pub fn from_name(name: &str) -> Result<Self> {
        METRIC_NAMES
            .iter()
            .find(|(raw, _)| *raw == name)
            .map(|(_, metric)| *metric)
            .ok_or_else(|| RnnUtilsError::KeyNotFound(format!("Unknown metric '{}'", name)))
    }

    /// Canonical display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Loss => "loss",
            Metric::Accuracy => "accuracy",
            Metric::Mse => "mse",
            Metric::Recall => "recall",
        }
    }

    /// Raw key names this metric may be stored under, in lookup order
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Metric::Loss => &["loss"],
            Metric::Accuracy => &["accuracy", "acc"],
            Metric::Mse => &["mse"],
            Metric::Recall => &["recall"],
        }
    }
}

/// A history key split into phase and metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricKey {
    pub phase: Phase,
    pub metric: Metric,
}

impl MetricKey {
    /// Parse a raw key such as `loss` or `val_accuracy`
    pub fn parse(key: &str) -> Result<Self> {
        let (phase, name) = match key.strip_prefix(VALIDATION_PREFIX) {
            Some(rest) => (Phase::Validation, rest),
            None => (Phase::Training, key),
        };

        Ok(Self {
            phase,
            metric: Metric::from_name(name)?,
        })
    }

    /// Legend label, e.g. `Validation accuracy`
    pub fn label(&self) -> String {
        format!("{} {}", self.phase.label(), self.metric.display_name())
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Ordered per-epoch metric series sharing one epoch count
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    series: Vec<(String, Vec<f64>)>,
}

impl History {
    /// Build a history from `(key, values)` pairs, keeping their order
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<f64>)>,
    {
        let mut series: Vec<(String, Vec<f64>)> = Vec::new();
        for (key, values) in pairs {
            let key = key.into();
            if series.iter().any(|(existing, _)| *existing == key) {
                return Err(RnnUtilsError::InvalidInput(format!(
                    "Duplicate history key '{}'",
                    key
                )));
            }
            if let Some((first_key, first)) = series.first() {
                if first.len() != values.len() {
                    return Err(RnnUtilsError::InvalidInput(format!(
                        "History series '{}' has {} epochs but '{}' has {}",
                        key,
                        values.len(),
                        first_key,
                        first.len()
                    )));
                }
            }
            series.push((key, values));
        }

        Ok(Self { series })
    }

    /// Parse a JSON object of metric arrays, e.g. a dumped `history.history`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)?;

        let mut pairs = Vec::with_capacity(map.len());
        for (key, value) in map {
            let values = value
                .as_array()
                .ok_or_else(|| {
                    RnnUtilsError::DataError(format!("History entry '{}' is not an array", key))
                })?
                .iter()
                .map(|v| {
                    v.as_f64().ok_or_else(|| {
                        RnnUtilsError::DataError(format!(
                            "History entry '{}' contains a non-numeric value",
                            key
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            pairs.push((key, values));
        }

        Self::from_pairs(pairs)
    }

    /// Read a CSV training log with one row per epoch
    ///
    /// An `epoch` column, if present, is dropped since epochs are implied by
    /// row order.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut columns: Vec<(String, Vec<f64>)> = headers
            .iter()
            .map(|h| (h.trim().to_string(), Vec::new()))
            .collect();

        for record in csv_reader.records() {
            let record = record?;
            for (field, (key, values)) in record.iter().zip(columns.iter_mut()) {
                let value = field.trim().parse::<f64>().map_err(|e| {
                    RnnUtilsError::DataError(format!(
                        "Invalid value '{}' in column '{}': {}",
                        field, key, e
                    ))
                })?;
                values.push(value);
            }
        }

        Self::from_pairs(columns.into_iter().filter(|(key, _)| key != "epoch"))
    }

    /// Read a CSV training log from disk
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Number of epochs covered by every series
    pub fn epochs(&self) -> usize {
        self.series.first().map(|(_, v)| v.len()).unwrap_or(0)
    }

    /// Number of metric series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when no metrics were recorded
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Metric keys in their original order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(key, values)` pairs in their original order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Values recorded under an exact key
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Values of a metric in a phase, trying each alias of the metric in turn
    pub fn resolve(&self, metric: Metric, phase: Phase) -> Result<&[f64]> {
        let prefix = match phase {
            Phase::Training => "",
            Phase::Validation => VALIDATION_PREFIX,
        };

        metric
            .aliases()
            .iter()
            .find_map(|alias| self.get(&format!("{}{}", prefix, alias)))
            .ok_or_else(|| {
                RnnUtilsError::KeyNotFound(format!(
                    "No {} {} series (tried {})",
                    phase.label().to_lowercase(),
                    metric.display_name(),
                    metric
                        .aliases()
                        .iter()
                        .map(|a| format!("'{}{}'", prefix, a))
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl TryFrom<Vec<(String, Vec<f64>)>> for History {
    type Error = RnnUtilsError;

    fn try_from(pairs: Vec<(String, Vec<f64>)>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

/// Anything that carries a training history, such as a fit result
pub trait HistorySource {
    fn history(&self) -> &History;
}

impl HistorySource for History {
    fn history(&self) -> &History {
        self
    }
}
