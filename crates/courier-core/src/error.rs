//! Core error type.
//!
//! Planning never errors: failed searches are empty or partial waypoint
//! vectors by contract.  Errors exist only at construction surfaces (parsing,
//! validation); sub-crates define their own enums in the same shape.

use thiserror::Error;

/// Errors from `courier-core` construction and parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown tier {0:?}: expected \"easy\", \"medium\", or \"hard\"")]
    UnknownTier(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `courier-core`.
pub type CoreResult<T> = Result<T, CoreError>;
