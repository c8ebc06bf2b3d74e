//! Feedback Commands
//!
//! `GET` and `POST` against `{base}/feedbacks`.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit};

use feedback_core::{FeedbackCollection, FeedbackItem};

use super::{check_status, send, set_json_headers};
use crate::error::ApiError;

/// Fetch every feedback item, in server order
pub async fn list_feedbacks(url: &str) -> Result<Vec<FeedbackItem>, ApiError> {
    let request = Request::new_with_str(url).map_err(ApiError::network)?;
    set_json_headers(&request, false)?;

    let response = send(&request).await?;
    check_status(&response)?;

    let body = JsFuture::from(response.json().map_err(ApiError::decode)?)
        .await
        .map_err(ApiError::decode)?;
    let collection: FeedbackCollection =
        serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(collection.feedbacks)
}

/// Post one item; the response body is ignored
pub async fn create_feedback(url: &str, item: &FeedbackItem) -> Result<(), ApiError> {
    let body = serde_json::to_string(item).map_err(|e| ApiError::Encode(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    set_json_headers(&request, true)?;

    let response = send(&request).await?;
    check_status(&response)
}
