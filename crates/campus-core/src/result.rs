//! Convenience result type alias for Campus Admin.

use crate::error::AppError;

/// A specialized `Result` type for Campus Admin operations.
pub type AppResult<T> = Result<T, AppError>;
