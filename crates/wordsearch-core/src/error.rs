//! Error types for the word search engine.

/// Result type for word search operations
pub type Result<T> = std::result::Result<T, WordSearchError>;

/// Errors that can occur while building catalogs, grids, and levels
#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    /// A caller-supplied argument was rejected before any work began
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A write targeted a cell outside the grid
    #[error("Position [{row},{col}] is out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A category id was looked up that was never registered
    #[error("Category '{0}' not found")]
    NotFound(String),

    /// Bundled content could not be decoded
    #[error("Malformed content file: {0}")]
    Content(#[from] serde_json::Error),
}

impl WordSearchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = WordSearchError::OutOfBounds {
            row: 9,
            col: 2,
            rows: 8,
            cols: 8,
        };
        assert_eq!(
            err.to_string(),
            "Position [9,2] is out of bounds for 8x8 grid"
        );
    }

    #[test]
    fn test_content_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: WordSearchError = json_err.into();
        assert!(matches!(err, WordSearchError::Content(_)));
    }
}
