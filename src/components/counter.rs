//! Counter Component
//!
//! Remaining character budget for the feedback textarea.

use leptos::prelude::*;

use feedback_core::remaining_chars;

use crate::store::{store_set_counter, use_app_store, AppStateStoreFields, AppStore};

/// Recompute the counter from the current textarea value
pub fn update_counter(store: &AppStore, text: &str, max_chars: usize) {
    store_set_counter(store, remaining_chars(text, max_chars));
}

#[component]
pub fn Counter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p class="counter">{move || store.counter().get()}</p>
    }
}
