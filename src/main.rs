//! Feedback Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod error;
mod store;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use config::AppConfig;
use error::InitError;

/// Element the app mounts into (see index.html). Everything else the
/// handlers touch is created by the components themselves.
const MOUNT_SELECTOR: &str = "#app";

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = boot() {
        web_sys::console::error_1(&format!("[Boot] {}", e).into());
    }
}

fn boot() -> Result<(), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;
    let root = find_element(&document, MOUNT_SELECTOR)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| InitError::MissingElement(MOUNT_SELECTOR.to_string()))?;

    let config = AppConfig::from_document(&document);
    web_sys::console::log_1(&format!("[Boot] Feedback endpoint {}", config.feedbacks_url()).into());

    leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
    Ok(())
}

fn find_element(document: &Document, selector: &str) -> Result<web_sys::Element, InitError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| InitError::MissingElement(selector.to_string()))
}
