use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("phone number must be a string or integer, got {found}")]
    InvalidType { found: &'static str },
    #[error("phone number is invalid: expected 10 digits, found {digits}")]
    InvalidLength { digits: usize },
    #[error("area code is invalid: {0}")]
    InvalidAreaCode(String),
    #[error("exchange code is invalid: {0}")]
    InvalidExchangeCode(String),
}

/// Coarse split between a raw value of the wrong shape and a well-typed value
/// that breaks the numbering plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Type,
    Value,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidType { .. } => ValidationErrorKind::Type,
            ValidationError::InvalidLength { .. }
            | ValidationError::InvalidAreaCode(_)
            | ValidationError::InvalidExchangeCode(_) => ValidationErrorKind::Value,
        }
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RecordError>;
