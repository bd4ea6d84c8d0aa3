//! Result type aliases for Click Tally.

use crate::TallyError;

/// A specialized `Result` type for tally operations.
pub type TallyResult<T> = Result<T, TallyError>;
