//! Feedback Form Component
//!
//! Validates new feedback, renders it right away and posts it to the server.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use feedback_core::{FeedbackItem, IndicatorKind};

use crate::commands;
use crate::components::counter::{update_counter, Counter};
use crate::config::use_config;
use crate::error::ApiError;
use crate::store::{
    store_clear_indicator, store_show_indicator, store_submit, use_app_store,
    AppStateStoreFields, AppStore,
};

/// Show the valid/invalid state for `duration_ms`, then drop it
fn flash_indicator(store: AppStore, kind: IndicatorKind, duration_ms: u32) {
    let generation = store_show_indicator(&store, kind);
    Timeout::new(duration_ms, move || {
        store_clear_indicator(&store, generation);
    })
    .forget();
}

/// Fire-and-forget POST; the optimistic entry stays whatever happens
fn submit_to_server(url: String, item: FeedbackItem) {
    spawn_local(async move {
        match commands::create_feedback(&url, &item).await {
            Ok(()) => {
                web_sys::console::log_1(&"[Form] Successfully submitted".into());
            }
            Err(ApiError::Status(status)) => {
                web_sys::console::log_1(&format!("[Form] Something went wrong (status {})", status).into());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Form] Submit failed: {}", e).into());
            }
        }
    });
}

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();
    let max_chars = config.max_chars;
    let indicator_ms = config.indicator_ms;
    let feedbacks_url = config.feedbacks_url();

    let (draft, set_draft) = signal(String::new());
    let textarea_ref = NodeRef::<html::Textarea>::new();
    let submit_ref = NodeRef::<html::Button>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();

        let item = match store_submit(&store, &text, max_chars) {
            Ok(item) => item,
            Err(e) => {
                web_sys::console::log_1(&format!("[Form] Rejected: {}", e).into());
                flash_indicator(store, IndicatorKind::Invalid, indicator_ms);
                if let Some(textarea) = textarea_ref.get() {
                    let _ = textarea.focus();
                }
                return;
            }
        };

        flash_indicator(store, IndicatorKind::Valid, indicator_ms);
        submit_to_server(feedbacks_url.clone(), item);

        set_draft.set(String::new());
        if let Some(button) = submit_ref.get() {
            let _ = button.blur();
        }
    };

    view! {
        <form class=move || store.indicator().get().form_class() on:submit=on_submit>
            <textarea
                id="feedback-textarea"
                class="form__textarea"
                spellcheck="false"
                node_ref=textarea_ref
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    update_counter(&store, &text, max_chars);
                    set_draft.set(text);
                }
            ></textarea>
            <label for="feedback-textarea" class="form__label">
                "Enter your feedback here, remember to "
                <span class="form__label--hashtag">"#hashtag"</span>
                " the company"
            </label>
            <div class="form__bottom">
                <Counter />
                <button type="submit" class="submit-btn" node_ref=submit_ref>"Submit"</button>
            </div>
        </form>
    }
}
