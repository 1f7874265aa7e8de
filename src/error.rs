//! Editor error types
//!
//! Every failure the editor reports to the user falls in one of three kinds.

use thiserror::Error;

/// Coarse classification used for logging and dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User input outside the accepted range
    Validation,
    /// Saved artwork missing or malformed
    CorruptData,
    /// The key-value store refused a read or write
    Storage,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("invalid grid size: {0:?}")]
    InvalidSize(String),
    #[error("no saved grid found")]
    NoSavedGrid,
    #[error("corrupt saved grid: {0}")]
    CorruptData(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl EditorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditorError::InvalidSize(_) => ErrorKind::Validation,
            EditorError::NoSavedGrid | EditorError::CorruptData(_) => ErrorKind::CorruptData,
            EditorError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Text shown in the blocking dialog
    pub fn user_message(&self) -> String {
        match self {
            EditorError::InvalidSize(_) => format!(
                "Please enter a size between {} and {}.",
                crate::consts::MIN_GRID_SIZE,
                crate::consts::MAX_GRID_SIZE
            ),
            EditorError::NoSavedGrid => "No saved grid found.".to_string(),
            EditorError::CorruptData(_) => "Failed to load grid. Please check saved data.".to_string(),
            EditorError::Storage(_) => "Could not access browser storage.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(EditorError::InvalidSize("1".into()).kind(), ErrorKind::Validation);
        assert_eq!(EditorError::NoSavedGrid.kind(), ErrorKind::CorruptData);
        assert_eq!(EditorError::CorruptData("x".into()).kind(), ErrorKind::CorruptData);
        assert_eq!(EditorError::Storage("quota".into()).kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            EditorError::InvalidSize("100".into()).user_message(),
            "Please enter a size between 2 and 64."
        );
        assert_eq!(EditorError::NoSavedGrid.user_message(), "No saved grid found.");
    }
}
