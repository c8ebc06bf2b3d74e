//! Frontend Error Types
//!
//! Failures of the HTTP wrappers and of the boot step.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors from talking to the feedback endpoint
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response; carries the browser's message
    #[error("{0}")]
    Network(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("No browser window available")]
    NoWindow,
}

impl ApiError {
    pub fn network(value: JsValue) -> Self {
        ApiError::Network(js_message(&value))
    }

    pub fn decode(value: JsValue) -> Self {
        ApiError::Decode(js_message(&value))
    }
}

/// Errors that stop the app from mounting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Required element not found: {0}")]
    MissingElement(String),
}

/// Best-effort message text of a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
