//! Submission Rules
//!
//! Character counting and the checks applied to text before it becomes
//! a `FeedbackItem`.

use crate::error::FeedbackError;

/// Character budget shown by the counter
pub const MAX_CHARS: usize = 150;

/// Shortest text accepted by the form
pub const MIN_CHARS: usize = 5;

const HASHTAG: char = '#';

/// Text length as the browser counts it (UTF-16 code units)
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Remaining budget; goes negative past `max`
pub fn remaining_chars(text: &str, max: usize) -> i64 {
    max as i64 - text_len(text) as i64
}

pub fn is_valid(text: &str) -> bool {
    text.contains(HASHTAG) && text_len(text) >= MIN_CHARS
}

pub fn validate(text: &str) -> Result<(), FeedbackError> {
    if is_valid(text) {
        Ok(())
    } else {
        Err(FeedbackError::Invalid { min: MIN_CHARS })
    }
}

/// First whitespace-separated token that contains `#`
pub fn find_hashtag(text: &str) -> Option<&str> {
    text.split_whitespace().find(|word| word.contains(HASHTAG))
}

/// Everything after the first `#` of a token
pub fn company_from_token(token: &str) -> &str {
    token
        .split_once(HASHTAG)
        .map(|(_, company)| company)
        .unwrap_or(token)
}

/// Uppercased first character, empty for an empty company
pub fn badge_letter(company: &str) -> String {
    company
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_requires_hashtag_and_length() {
        assert!(is_valid("#Acme"));
        assert!(is_valid("good #stuff"));
        assert!(!is_valid("#Ace"));
        assert!(!is_valid("no hashtag at all"));
        assert!(!is_valid(""));
        // hash anywhere counts, even mid-word
        assert!(is_valid("abc#def"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(text_len("abc"), 3);
        assert_eq!(text_len("é"), 1);
        assert_eq!(text_len("😀"), 2);
        assert!(is_valid("#😀😀"));
    }

    #[test]
    fn test_remaining_chars() {
        assert_eq!(remaining_chars("", MAX_CHARS), 150);
        assert_eq!(remaining_chars("hello", MAX_CHARS), 145);
        let long = "x".repeat(160);
        assert_eq!(remaining_chars(&long, MAX_CHARS), -10);
    }

    #[test]
    fn test_find_hashtag_splits_on_any_whitespace() {
        assert_eq!(find_hashtag("great\n#Acme\tproduct"), Some("#Acme"));
        assert_eq!(find_hashtag("nothing here"), None);
    }

    #[test]
    fn test_company_from_token() {
        assert_eq!(company_from_token("#Acme"), "Acme");
        assert_eq!(company_from_token("(#Acme)"), "Acme)");
        assert_eq!(company_from_token("#"), "");
    }

    #[test]
    fn test_badge_letter() {
        assert_eq!(badge_letter("acme"), "A");
        assert_eq!(badge_letter("Émile"), "É");
        assert_eq!(badge_letter(""), "");
    }
}
