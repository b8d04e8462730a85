//! Crate error type.

/// Errors raised while binding behavior to the page.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A required element was not found in the document.
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    /// An element was found but is not of the expected DOM type.
    #[error("element {selector} is not a {expected}")]
    UnexpectedElement { selector: &'static str, expected: &'static str },
    /// A browser API call threw.
    #[error("dom call failed: {0}")]
    Js(String),
    /// The inline site configuration could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// A config field parsed but holds a value the browser would reject.
    #[error("invalid site config: {field} {reason}")]
    InvalidSetting { field: &'static str, reason: &'static str },
    /// A stat element's text is not a non-negative integer (optionally `+`-suffixed).
    #[error("stat text is not a counter value: {0:?}")]
    InvalidCounter(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
