//! Structured error types shared across the stab crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`StabError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case error code.
    pub code: String,
    /// Human readable diagnostic naming the violated constraint.
    pub message: String,
    /// Contextual key value pairs (sizes, indices, offending values).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for circuit synthesis and code construction.
///
/// `Config` and `Geometry` are caller mistakes and are reported as soon as the
/// offending input is seen. `Invariant` means the builder produced something
/// inconsistent and is never the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum StabError {
    /// Unrecognised code family, malformed noise vector, bad classical code.
    #[error("configuration error: {0}")]
    Config(ErrorInfo),
    /// Shape or entry violations in GF(2) matrix algebra.
    #[error("matrix error: {0}")]
    Matrix(ErrorInfo),
    /// Invalid lattice geometry (even or degenerate scale, missing positions).
    #[error("geometry error: {0}")]
    Geometry(ErrorInfo),
    /// Internal invariant violation detected while building a circuit.
    #[error("internal invariant violated: {0}")]
    Invariant(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors surfaced by the command line front end.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl StabError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            StabError::Config(info)
            | StabError::Matrix(info)
            | StabError::Geometry(info)
            | StabError::Invariant(info)
            | StabError::Serde(info)
            | StabError::Io(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Shorthand for a configuration error.
    pub fn config(code: &str, message: impl Into<String>) -> Self {
        StabError::Config(ErrorInfo::new(code, message))
    }

    /// Shorthand for an internal invariant violation.
    pub fn invariant(code: &str, message: impl Into<String>) -> Self {
        StabError::Invariant(ErrorInfo::new(code, message))
    }
}
