//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use feedback_core::{
    EntryId, FeedbackBoard, FeedbackError, FeedbackItem, HashtagList, IndicatorKind,
    IndicatorState,
};

use crate::config::AppConfig;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered feedback entries and initial load status
    pub board: FeedbackBoard,
    /// Remaining characters shown under the textarea
    pub counter: i64,
    /// Transient valid/invalid state of the form
    pub indicator: IndicatorState,
    /// Hashtags offered by the filter
    pub hashtags: HashtagList,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            counter: config.max_chars as i64,
            hashtags: HashtagList::new(&config.default_hashtags),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append an item to the end of the list
pub fn store_append_item(store: &AppStore, item: FeedbackItem) -> EntryId {
    store.hashtags().write().add_company(&item.company);
    store.board().write().append_item(item)
}

/// Validate and append form text, then reset the counter.
///
/// Returns the new item for posting; on invalid text nothing changes.
pub fn store_submit(store: &AppStore, text: &str, max_chars: usize) -> Result<FeedbackItem, FeedbackError> {
    let item = FeedbackItem::from_submission(text)?;
    store_append_item(store, item.clone());
    store_set_counter(store, max_chars as i64);
    Ok(item)
}

/// Initial load succeeded
pub fn store_finish_loading(store: &AppStore, items: Vec<FeedbackItem>) {
    for item in &items {
        store.hashtags().write().add_company(&item.company);
    }
    store.board().write().finish_loading(items);
}

/// Initial load failed
pub fn store_fail_loading(store: &AppStore, message: String) {
    store.board().write().fail_loading(message);
}

pub fn store_increment_upvote(store: &AppStore, id: EntryId) -> Result<Option<u32>, FeedbackError> {
    store.board().write().increment_upvote(id)
}

pub fn store_toggle_expanded(store: &AppStore, id: EntryId) -> Result<bool, FeedbackError> {
    store.board().write().toggle_expanded(id)
}

/// Drop every entry not about `company`; returns how many went
pub fn store_filter_company(store: &AppStore, company: &str) -> usize {
    store.board().write().retain_company(company)
}

pub fn store_set_counter(store: &AppStore, remaining: i64) {
    *store.counter().write() = remaining;
}

pub fn store_show_indicator(store: &AppStore, kind: IndicatorKind) -> u64 {
    store.indicator().write().show(kind)
}

pub fn store_clear_indicator(store: &AppStore, generation: u64) {
    store.indicator().write().clear(generation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(AppState::new(&AppConfig::default()))));
    }

    #[test]
    fn test_submit_appends_one_entry_and_resets_counter() {
        with_store(|store| {
            store_append_item(&store, FeedbackItem::from_submission("#Globex first").unwrap());
            store_set_counter(&store, 139);

            let item = store_submit(&store, "#Acme ships fast", 150).unwrap();
            assert_eq!(item.company, "Acme");
            assert_eq!(store.counter().get(), 150);

            let field = store.board();
            let board = field.read();
            assert_eq!(board.len(), 2);
            assert_eq!(board.entries()[1].item.text, "#Acme ships fast");
            assert_eq!(board.entries()[1].item.upvote_count, 0);
        });
    }

    #[test]
    fn test_invalid_submit_changes_nothing() {
        with_store(|store| {
            store_set_counter(&store, 147);

            assert_eq!(
                store_submit(&store, "abc", 150),
                Err(FeedbackError::Invalid { min: 5 })
            );
            assert!(store.board().read().is_empty());
            assert_eq!(store.counter().get(), 147);
        });
    }

    #[test]
    fn test_finish_loading_adds_hashtags_once() {
        with_store(|store| {
            let items = vec![
                FeedbackItem::from_submission("#Globex one").unwrap(),
                FeedbackItem::from_submission("#globex two").unwrap(),
                FeedbackItem::from_submission("#Nike three").unwrap(),
            ];
            store_finish_loading(&store, items);

            assert_eq!(store.board().read().len(), 3);
            let labels = store.hashtags().read().labels();
            assert_eq!(labels.iter().filter(|l| l.eq_ignore_ascii_case("#globex")).count(), 1);
            assert_eq!(labels.iter().filter(|l| l.as_str() == "#Nike").count(), 1);
        });
    }
}
