//! Feedback Item Entity
//!
//! The single entity shown on the board, in the shape the remote
//! collection endpoint sends and accepts.

use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;
use crate::submission::{self, badge_letter, company_from_token, find_hashtag};

/// One hashtag-tagged feedback entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub upvote_count: u32,
    pub company: String,
    pub badge_letter: String,
    pub days_ago: u32,
    pub text: String,
}

impl FeedbackItem {
    /// Build a fresh item from text typed into the form.
    ///
    /// Validates first, then derives `company` and `badge_letter` from the
    /// first whitespace-separated token containing `#`.
    pub fn from_submission(text: &str) -> Result<Self, FeedbackError> {
        submission::validate(text)?;

        let hashtag = find_hashtag(text)
            .ok_or_else(|| FeedbackError::MissingHashtag(text.to_string()))?;
        let company = company_from_token(hashtag);

        Ok(Self {
            upvote_count: 0,
            company: company.to_string(),
            badge_letter: badge_letter(company),
            days_ago: 0,
            text: text.to_string(),
        })
    }

    /// "NEW" for today, "{n}d" otherwise
    pub fn date_label(&self) -> String {
        if self.days_ago == 0 {
            "NEW".to_string()
        } else {
            format!("{}d", self.days_ago)
        }
    }
}

/// Body of `GET /feedbacks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackCollection {
    pub feedbacks: Vec<FeedbackItem>,
}
