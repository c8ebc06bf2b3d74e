//! Feedback List Component
//!
//! Loads the initial feedback from the server and handles upvote/expand
//! clicks through one listener on the list container.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use feedback_core::markup::{load_failure_text, render_board};
use feedback_core::EntryId;

use crate::commands;
use crate::config::use_config;
use crate::store::{
    store_fail_loading, store_finish_loading, store_increment_upvote, store_toggle_expanded,
    use_app_store, AppStateStoreFields,
};

/// What a click inside the list asks for
#[derive(Clone, Copy, Debug, PartialEq)]
enum ListClick {
    Upvote(EntryId),
    Expand(EntryId),
}

/// Decide from the clicked entry's `data-id` and whether the click landed
/// inside its upvote control. Clicks outside any entry do nothing.
fn classify_click(entry_id: Option<&str>, in_upvote: bool) -> Option<ListClick> {
    let id = entry_id?.parse().ok()?;
    Some(if in_upvote { ListClick::Upvote(id) } else { ListClick::Expand(id) })
}

fn click_action(target: &web_sys::Element) -> Option<ListClick> {
    let in_upvote = matches!(target.closest(".upvote"), Ok(Some(_)));
    let entry = target.closest(".feedback").ok().flatten()?;
    classify_click(entry.get_attribute("data-id").as_deref(), in_upvote)
}

#[component]
pub fn FeedbackList() -> impl IntoView {
    let store = use_app_store();
    let feedbacks_url = use_config().feedbacks_url();

    // Initial load
    Effect::new(move |_| {
        let url = feedbacks_url.clone();
        spawn_local(async move {
            match commands::list_feedbacks(&url).await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[FeedbackList] Loaded {} items", items.len()).into());
                    store_finish_loading(&store, items);
                }
                Err(e) => {
                    let message = e.to_string();
                    web_sys::console::error_1(&load_failure_text(&message).into());
                    store_fail_loading(&store, message);
                }
            }
        });
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        match click_action(&target) {
            Some(ListClick::Upvote(id)) => match store_increment_upvote(&store, id) {
                Ok(Some(count)) => {
                    web_sys::console::log_1(&format!("[FeedbackList] Upvoted {} to {}", id, count).into());
                }
                Ok(None) => {}
                Err(e) => web_sys::console::error_1(&format!("[FeedbackList] {}", e).into()),
            },
            Some(ListClick::Expand(id)) => {
                if let Err(e) = store_toggle_expanded(&store, id) {
                    web_sys::console::error_1(&format!("[FeedbackList] {}", e).into());
                }
            }
            None => {}
        }
    };

    view! {
        <ol
            class="feedbacks"
            on:click=on_click
            inner_html=move || render_board(&store.board().read())
        ></ol>
    }
}
