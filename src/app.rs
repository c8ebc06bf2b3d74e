//! Feedback Board App
//!
//! Root component: provides config and store, lays out the board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FeedbackForm, FeedbackList, HashtagFilter};
use crate::config::AppConfig;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide store and config to all children
    provide_context(Store::new(AppState::new(&config)));
    provide_context(config);

    view! {
        <main class="container">
            <section class="header">
                <h1 class="logo">"CorpComment"</h1>
                <h2 class="header__title">"Give feedback. Publicly."</h2>
                <FeedbackForm />
            </section>

            <section class="feedback-board">
                <FeedbackList />
            </section>

            <aside class="hashtag-panel">
                <HashtagFilter />
            </aside>
        </main>
    }
}
