//! Hashtag Filter Component
//!
//! Clicking a hashtag removes every feedback entry about another company.
//! There is no reset; removed entries return only on a full reload.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use feedback_core::company_from_hashtag;

use crate::store::{store_filter_company, use_app_store, AppStateStoreFields};

#[component]
pub fn HashtagFilter() -> impl IntoView {
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        // Click in the list, but outside any hashtag
        let Some(hashtag) = target.closest(".hashtags__item").ok().flatten() else {
            return;
        };

        let label = hashtag.text_content().unwrap_or_default();
        let company = company_from_hashtag(&label);
        let removed = store_filter_company(&store, &company);
        web_sys::console::log_1(&format!("[HashtagFilter] {} -> removed {}", label.trim(), removed).into());
    };

    view! {
        <ul class="hashtags" on:click=on_click>
            <For
                each=move || store.hashtags().read().labels()
                key=|label| label.clone()
                children=move |label| {
                    view! {
                        <li class="hashtags__item">
                            <button class="hashtag">{label}</button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
