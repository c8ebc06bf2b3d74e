//! Feedback Board Core
//!
//! Browser-independent domain logic for the feedback board:
//! - `item`: the feedback entity and its wire format
//! - `submission`: validation, counter arithmetic and hashtag extraction
//! - `board`: the list view-model the UI renders from
//! - `hashtag`: hashtag labels and the filter's company matching
//! - `indicator`: transient form validation state
//! - `markup`: escaped HTML for list entries

mod error;
pub mod item;
pub mod submission;
pub mod board;
pub mod hashtag;
pub mod indicator;
pub mod markup;

pub use error::FeedbackError;
pub use item::{FeedbackCollection, FeedbackItem};
pub use submission::{is_valid, remaining_chars, text_len, MAX_CHARS, MIN_CHARS};
pub use board::{BoardEntry, EntryId, FeedbackBoard, ListStatus};
pub use hashtag::{company_from_hashtag, normalize_company, HashtagList};
pub use indicator::{Indicator, IndicatorKind, IndicatorState};
