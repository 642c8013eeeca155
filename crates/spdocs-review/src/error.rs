//! Review failures and their normalization.

/// Marker of the lookup failure raised when a repository or branch has no tree.
const MISSING_TREE: &str = "KeyError: 'tree'";

/// Error produced at the review boundary.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The repository or branch does not exist.
    #[error("Invalid repository or branch. Please try again.")]
    InvalidReference,
    /// Repository or branch was left empty.
    #[error("Please enter a repo ({repo}) and branch ({branch})")]
    MissingTarget {
        /// Repository as given.
        repo: String,
        /// Branch as given.
        branch: String,
    },
    /// Any other failure of the review run, verbatim.
    #[error("{0}")]
    Failed(String),
    /// The saved results could not be decoded.
    #[error("Invalid review results: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReviewError {
    /// Classify a failure message reported by the review run.
    ///
    /// ```
    /// use spdocs_review::ReviewError;
    ///
    /// let err = ReviewError::from_message("Traceback ...\nKeyError: 'tree'\n");
    /// assert_eq!(err.to_string(), "Invalid repository or branch. Please try again.");
    ///
    /// let err = ReviewError::from_message("rate limited");
    /// assert_eq!(err.to_string(), "rate limited");
    /// ```
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        if message.contains(MISSING_TREE) {
            Self::InvalidReference
        } else {
            Self::Failed(message.to_owned())
        }
    }
}
