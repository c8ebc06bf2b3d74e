//! Hashtag Filter Helpers
//!
//! Turns a clicked hashtag label into the company it filters by, and keeps
//! the list of hashtags offered above the board.

/// Company a hashtag label filters by: marker dropped, lowercased, trimmed
pub fn company_from_hashtag(label: &str) -> String {
    let mut chars = label.chars();
    chars.next();
    normalize_company(chars.as_str())
}

pub fn normalize_company(company: &str) -> String {
    company.to_lowercase().trim().to_string()
}

/// Hashtags offered for filtering, in first-seen order.
///
/// Companies are de-duplicated case-insensitively; the first spelling wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashtagList {
    companies: Vec<String>,
}

impl HashtagList {
    pub fn new<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for company in seed {
            list.add_company(company.as_ref());
        }
        list
    }

    /// Returns true when the company was new
    pub fn add_company(&mut self, company: &str) -> bool {
        let company = company.trim();
        if company.is_empty() {
            return false;
        }
        let key = normalize_company(company);
        if self.companies.iter().any(|c| normalize_company(c) == key) {
            return false;
        }
        self.companies.push(company.to_string());
        true
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    /// Button labels, e.g. "#Acme"
    pub fn labels(&self) -> Vec<String> {
        self.companies.iter().map(|c| format!("#{}", c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_from_hashtag() {
        assert_eq!(company_from_hashtag("#Acme"), "acme");
        assert_eq!(company_from_hashtag("#Acme  "), "acme");
        assert_eq!(company_from_hashtag("#McDonald's"), "mcdonald's");
        assert_eq!(company_from_hashtag(""), "");
        // only one marker character is dropped
        assert_eq!(company_from_hashtag("##Acme"), "#acme");
    }

    #[test]
    fn test_hashtag_list_dedupes_case_insensitively() {
        let mut list = HashtagList::new(["Acme", "Nike"]);
        assert!(!list.add_company("acme"));
        assert!(!list.add_company("  NIKE "));
        assert!(!list.add_company(""));
        assert!(list.add_company("Globex"));
        assert_eq!(list.companies(), ["Acme", "Nike", "Globex"]);
        assert_eq!(list.labels(), vec!["#Acme", "#Nike", "#Globex"]);
    }

    #[test]
    fn test_label_filters_back_to_company() {
        let list = HashtagList::new(["Starbucks"]);
        let label = &list.labels()[0];
        assert_eq!(company_from_hashtag(label), normalize_company("Starbucks"));
    }
}
