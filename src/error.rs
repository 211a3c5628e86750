//! Typed errors for all engine components
//!
//! Every component either returns a fully valid result or fails with one of
//! these variants; nothing is retried internally and nothing is swallowed.
//! Each variant carries the offending field and value so the caller can
//! correct the request.

use thiserror::Error;

/// Error taxonomy shared by all engine components
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Malformed or out-of-range input (negative periods, tax rate outside
    /// [0,1], non-finite rate, ...)
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Mathematically undefined operation (percent change from a zero
    /// baseline, attribution of a zero total)
    #[error("undefined result in {context}: {reason}")]
    UndefinedResult {
        context: &'static str,
        reason: &'static str,
    },

    /// Name collision that would make the output ambiguous
    #[error("ambiguous input: duplicate {kind} name `{name}`")]
    AmbiguousInput { kind: &'static str, name: String },
}

impl EngineError {
    /// Shorthand for an `InvalidParameter` with a displayable value
    pub fn invalid(
        field: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;
