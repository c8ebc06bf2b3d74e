//! Feedback API Wrappers
//!
//! Frontend bindings to the remote feedback collection, over `fetch`.

mod feedback;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::error::ApiError;

// Re-export all public items
pub use feedback::*;

/// Run a request and hand back the response, whatever its status
async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    value.dyn_into::<Response>().map_err(ApiError::decode)
}

/// Fail on anything outside 200-299
fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

fn set_json_headers(request: &Request, with_body: bool) -> Result<(), ApiError> {
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(ApiError::network)?;
    if with_body {
        headers.set("Content-Type", "application/json").map_err(ApiError::network)?;
    }
    Ok(())
}
