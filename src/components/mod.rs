//! UI Components
//!
//! The four board components.

mod counter;
mod feedback_form;
mod feedback_list;
mod hashtag_filter;

pub use feedback_form::FeedbackForm;
pub use feedback_list::FeedbackList;
pub use hashtag_filter::HashtagFilter;
