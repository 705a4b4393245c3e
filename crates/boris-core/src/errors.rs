//! Error taxonomy for trajectory loading and diagnostics.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload carried by every [`BorisError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable code, e.g. `record-field-count`.
    pub code: String,
    /// Human readable description.
    pub message: String,
    /// Where the failure happened: file, line, field, expected sizes.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Records the offending file under the `path` key.
    pub fn with_path(self, path: &Path) -> Self {
        self.with_context("path", path.display())
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            write!(f, ")")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; hint: {hint}")?;
        }
        Ok(())
    }
}

/// Every failure surfaced by the loader, the diagnostics engine and the exporters.
///
/// All variants are fatal for the dataset being analysed; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum BorisError {
    /// The main or reference trajectory file is absent.
    #[error("data file not found: {0}")]
    DataFileNotFound(ErrorInfo),
    /// A row does not parse into the twelve-column record shape.
    #[error("malformed record: {0}")]
    MalformedRecord(ErrorInfo),
    /// Series lengths disagree with the run dimensions.
    #[error("invalid dataset: {0}")]
    InvalidDataset(ErrorInfo),
    /// The run configuration is unreadable or inconsistent.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Writing an export artefact failed.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// JSON or YAML encoding failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl BorisError {
    pub fn info(&self) -> &ErrorInfo {
        match self {
            BorisError::DataFileNotFound(info)
            | BorisError::MalformedRecord(info)
            | BorisError::InvalidDataset(info)
            | BorisError::Config(info)
            | BorisError::Io(info)
            | BorisError::Serde(info) => info,
        }
    }

    /// Shorthand for the machine readable code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    pub fn invalid_dataset(code: &str, message: impl Into<String>) -> Self {
        BorisError::InvalidDataset(ErrorInfo::new(code, message))
    }

    pub fn io(code: &str, path: &Path, err: impl ToString) -> Self {
        BorisError::Io(ErrorInfo::new(code, err.to_string()).with_path(path))
    }
}
