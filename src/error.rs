//! Crate-level error type

use crate::calc::CalcError;
use crate::store::StoreError;
use crate::tasks::TaskError;

/// Errors created by this library
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Record store error
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Arithmetic helper error
    #[error(transparent)]
    Calc(#[from] CalcError),
    /// Task service error
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
