//! Domain Layer - Errors
//!
//! Error type shared by link list operations, asset handling and parsing.

use thiserror::Error;

/// Common result type for nav operations
pub type NavResult<T> = Result<T, NavError>;

/// Errors raised by list mutations, asset handling and attribute parsing
#[derive(Debug, Error)]
pub enum NavError {
    #[error("index {index} out of range for list of {len} links")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("link {0} cannot be its own parent")]
    SelfParent(u32),
    #[error("no submenu parent with id {0}")]
    UnknownParent(u32),
    #[error("submenu {0} cannot be nested under another submenu")]
    NestedGroup(u32),
    #[error("invalid icon asset: {0}")]
    InvalidAsset(String),
    #[error("attribute serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NavError {
    /// Guard used by every index-taking operation
    pub(crate) fn check_index(index: usize, len: usize) -> NavResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(NavError::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(NavError::check_index(0, 1).is_ok());
        let err = NavError::check_index(3, 3).unwrap_err();
        assert_eq!(err.to_string(), "index 3 out of range for list of 3 links");
    }
}
