//! Core error types.

use thiserror::Error;

use crate::board::EntryId;

/// Errors raised while turning text into feedback or mutating the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must contain a hashtag and be at least {min} characters long")]
    Invalid { min: usize },

    #[error("no hashtag token in feedback text: {0:?}")]
    MissingHashtag(String),

    #[error("no feedback entry with id {0}")]
    UnknownEntry(EntryId),
}
