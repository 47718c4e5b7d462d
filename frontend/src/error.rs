use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that stop the page controller from binding.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("required {role} element not found (selector `{selector}`)")]
    MissingElement { role: &'static str, selector: String },

    #[error("selector `{selector}` rejected: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn missing(role: &'static str, selector: &str) -> Self {
        Self::MissingElement {
            role,
            selector: selector.to_string(),
        }
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_error_message(&value))
    }
}

/// Best-effort text of a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|msg| msg.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
