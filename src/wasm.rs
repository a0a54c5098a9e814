//! WASM bindings for the browser editor's live preview.
//!
//! This module exposes the formatter and post views to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::page::render_post;
use crate::post::{Post, PostDraft};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert post content to display HTML.
///
/// Called on every keystroke of the editor preview.
#[wasm_bindgen(js_name = formatContentToHtml)]
pub fn format_content_to_html(markdown: &str) -> String {
    crate::format::format_content_to_html(markdown)
}

/// Reading-time label for post content, e.g. `"3 min read"`.
#[wasm_bindgen(js_name = estimateReadingTime)]
pub fn estimate_reading_time(text: &str) -> String {
    crate::reading::estimate_reading_time(text)
}

/// Render a post's detail view.
///
/// Takes the post as JSON, either bare or wrapped in the backend's
/// `{"post": ...}` response, and returns HTML.
#[wasm_bindgen(js_name = renderPost)]
pub fn render_post_json(json: &str) -> Result<String, JsValue> {
    let post = Post::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(render_post(&post))
}

/// Check whether a draft may be published.
///
/// Takes the editor form as JSON; rejects with the validation message.
#[wasm_bindgen(js_name = validateDraft)]
pub fn validate_draft(json: &str) -> Result<(), JsValue> {
    PostDraft::from_json(json)
        .and_then(|draft| draft.validate())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
