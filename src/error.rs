//! Error type shared by every stage of the expansion pipeline.
//!
//! There are exactly three kinds of failure: talking to the API, the API
//! answering with something we cannot map, and writing the output file.
//! None of them are retried; callers propagate them with `?` up to the entry
//! point.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpandError {
    /// Network failure, unreadable body or non-success HTTP status.
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// A list or detail response is missing a required field or has the wrong shape.
    #[error("unexpected data in {context}: {reason}")]
    Schema { context: String, reason: String },

    /// The aggregate document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExpandError {
    pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
        ExpandError::Transport {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn schema(context: impl Into<String>, reason: impl ToString) -> Self {
        ExpandError::Schema {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExpandError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ExpandError::Transport { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, ExpandError::Schema { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ExpandError::Io { .. })
    }
}
