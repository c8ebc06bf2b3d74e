//! Feedback Board View-Model
//!
//! Ordered list of rendered entries plus the load status of the list.
//! The UI never edits markup directly; it calls these operations and
//! re-renders from the result.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::FeedbackError;
use crate::hashtag::normalize_company;
use crate::item::FeedbackItem;

/// Board-local identity of a rendered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// A feedback item as it sits in the list
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry {
    pub id: EntryId,
    pub item: FeedbackItem,
    /// Upvote control used up (disabled)
    pub upvoted: bool,
    pub expanded: bool,
}

/// State of the initial fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackBoard {
    entries: Vec<BoardEntry>,
    status: ListStatus,
    next_id: u32,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&BoardEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn get_mut(&mut self, id: EntryId) -> Result<&mut BoardEntry, FeedbackError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(FeedbackError::UnknownEntry(id))
    }

    /// Append to the end of the list
    pub fn append_item(&mut self, item: FeedbackItem) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(BoardEntry {
            id,
            item,
            upvoted: false,
            expanded: false,
        });
        id
    }

    /// Initial fetch succeeded: drop the spinner and append in server order
    /// after anything submitted meanwhile.
    pub fn finish_loading(&mut self, items: Vec<FeedbackItem>) {
        self.status = ListStatus::Loaded;
        for item in items {
            self.append_item(item);
        }
    }

    /// Initial fetch failed: the message replaces the whole list
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.entries.clear();
        self.status = ListStatus::Failed(message.into());
    }

    /// Count up once and lock the control.
    ///
    /// Returns the new count, or `None` when the control was already used.
    pub fn increment_upvote(&mut self, id: EntryId) -> Result<Option<u32>, FeedbackError> {
        let entry = self.get_mut(id)?;
        if entry.upvoted {
            return Ok(None);
        }
        entry.upvoted = true;
        entry.item.upvote_count = entry.item.upvote_count.saturating_add(1);
        Ok(Some(entry.item.upvote_count))
    }

    /// Flip the expanded state, returning the new one
    pub fn toggle_expanded(&mut self, id: EntryId) -> Result<bool, FeedbackError> {
        let entry = self.get_mut(id)?;
        entry.expanded = !entry.expanded;
        Ok(entry.expanded)
    }

    pub fn remove_item(&mut self, id: EntryId) -> Result<BoardEntry, FeedbackError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(FeedbackError::UnknownEntry(id))?;
        Ok(self.entries.remove(index))
    }

    /// Remove every entry whose company differs from `company`
    /// (compared lowercased and trimmed). Returns how many were removed.
    pub fn retain_company(&mut self, company: &str) -> usize {
        let target = normalize_company(company);
        let before = self.entries.len();
        self.entries
            .retain(|entry| normalize_company(&entry.item.company) == target);
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(company: &str) -> FeedbackItem {
        FeedbackItem::from_submission(&format!("#{} is fine", company)).unwrap()
    }

    fn companies(board: &FeedbackBoard) -> Vec<String> {
        board.entries().iter().map(|e| e.item.company.clone()).collect()
    }

    #[test]
    fn test_append_keeps_order() {
        let mut board = FeedbackBoard::new();
        let a = board.append_item(make_item("Acme"));
        let b = board.append_item(make_item("Globex"));
        assert_ne!(a, b);
        assert_eq!(companies(&board), vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_finish_loading_appends_after_optimistic_items() {
        let mut board = FeedbackBoard::new();
        assert_eq!(board.status(), &ListStatus::Loading);
        board.append_item(make_item("Mine"));
        board.finish_loading(vec![make_item("Acme"), make_item("Globex")]);
        assert_eq!(board.status(), &ListStatus::Loaded);
        assert_eq!(companies(&board), vec!["Mine", "Acme", "Globex"]);
    }

    #[test]
    fn test_fail_loading_replaces_content() {
        let mut board = FeedbackBoard::new();
        board.append_item(make_item("Mine"));
        board.fail_loading("Network error");
        assert!(board.is_empty());
        assert_eq!(board.status(), &ListStatus::Failed("Network error".into()));

        board.append_item(make_item("Later"));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_upvote_once_then_inert() {
        let mut board = FeedbackBoard::new();
        let mut item = make_item("Acme");
        item.upvote_count = 9;
        let id = board.append_item(item);

        assert_eq!(board.increment_upvote(id), Ok(Some(10)));
        assert!(board.get(id).unwrap().upvoted);
        assert_eq!(board.increment_upvote(id), Ok(None));
        assert_eq!(board.get(id).unwrap().item.upvote_count, 10);
    }

    #[test]
    fn test_toggle_expanded_alternates() {
        let mut board = FeedbackBoard::new();
        let id = board.append_item(make_item("Acme"));
        assert_eq!(board.toggle_expanded(id), Ok(true));
        assert_eq!(board.toggle_expanded(id), Ok(false));
        assert_eq!(board.toggle_expanded(id), Ok(true));
    }

    #[test]
    fn test_unknown_entry() {
        let mut board = FeedbackBoard::new();
        let id = board.append_item(make_item("Acme"));
        board.remove_item(id).unwrap();
        assert_eq!(board.increment_upvote(id), Err(FeedbackError::UnknownEntry(id)));
        assert!(board.remove_item(id).is_err());
    }

    #[test]
    fn test_retain_company_is_irreversible() {
        let mut board = FeedbackBoard::new();
        board.append_item(make_item("Acme"));
        board.append_item(make_item("Globex"));
        let mut last = make_item("acme");
        last.text = "second acme".into();
        board.append_item(last);

        assert_eq!(board.retain_company("Acme"), 1);
        assert_eq!(companies(&board), vec!["Acme", "acme"]);
        assert_eq!(board.entries()[1].item.text, "second acme");

        assert_eq!(board.retain_company("globex"), 2);
        assert!(board.is_empty());
        assert_eq!(board.retain_company("acme"), 0);
    }

    #[test]
    fn test_entry_id_round_trips_through_attribute_text() {
        let mut board = FeedbackBoard::new();
        board.append_item(make_item("Acme"));
        let id = board.append_item(make_item("Globex"));
        assert_eq!(id.to_string().parse::<EntryId>(), Ok(id));
        assert!("x1".parse::<EntryId>().is_err());
    }
}
