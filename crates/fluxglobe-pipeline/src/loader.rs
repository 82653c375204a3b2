//! Dataset loading with per-record recovery.
//!
//! A malformed record never aborts the load: it is dropped and reported as
//! a [`RecordIssue`], and parsing continues with the rest of the array.
//! Timestamp leniency (fractional-second RFC3339 first, plain ISO8601
//! second) lives in `UtcDateTime::parse_lenient`, which backs the serde
//! impl for the `ts` field.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use fluxglobe_core::{AssetFlow, AssetSignal, ValidationError};

use crate::LoadError;

/// A dropped dataset record and why it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    pub index: usize,
    pub reason: String,
}

/// Fully loaded dataset plus the records that did not survive parsing.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub signals: Vec<AssetSignal>,
    pub flows: Vec<AssetFlow>,
    pub issues: Vec<RecordIssue>,
}

pub async fn load_signals(path: &Path) -> Result<(Vec<AssetSignal>, Vec<RecordIssue>), LoadError> {
    load_records(path).await
}

pub async fn load_flows(path: &Path) -> Result<(Vec<AssetFlow>, Vec<RecordIssue>), LoadError> {
    load_records(path).await
}

/// Loads both collections; issue lists are concatenated, signals first.
/// Issue indices refer to positions within each source array.
pub async fn load_dataset(signals_path: &Path, flows_path: &Path) -> Result<Dataset, LoadError> {
    let (signals, mut issues) = load_signals(signals_path).await?;
    let (flows, flow_issues) = load_flows(flows_path).await?;
    issues.extend(flow_issues);

    Ok(Dataset {
        signals,
        flows,
        issues,
    })
}

/// Dataset record that can re-check its own invariants after
/// deserialization. Serde derives accept any floats, so the constructor
/// rules are re-applied here before a record enters the dataset.
trait DatasetRecord: DeserializeOwned {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl DatasetRecord for AssetSignal {
    fn validate(&self) -> Result<(), ValidationError> {
        AssetSignal::validate(self)
    }
}

impl DatasetRecord for AssetFlow {
    fn validate(&self) -> Result<(), ValidationError> {
        AssetFlow::validate(self)
    }
}

async fn load_records<T: DatasetRecord>(
    path: &Path,
) -> Result<(Vec<T>, Vec<RecordIssue>), LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|error| {
        if error.kind() == ErrorKind::NotFound {
            LoadError::SourceNotFound {
                path: PathBuf::from(path),
            }
        } else {
            LoadError::Io(error)
        }
    })?;

    let raw: Vec<Value> = serde_json::from_slice(&bytes).map_err(|source| LoadError::Decode {
        path: PathBuf::from(path),
        source,
    })?;

    let mut records = Vec::with_capacity(raw.len());
    let mut issues = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => match record.validate() {
                Ok(()) => records.push(record),
                Err(error) => issues.push(RecordIssue {
                    index,
                    reason: error.to_string(),
                }),
            },
            Err(error) => issues.push(RecordIssue {
                index,
                reason: error.to_string(),
            }),
        }
    }

    Ok((records, issues))
}
