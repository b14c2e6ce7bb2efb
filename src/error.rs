//! Crate error type.
//!
//! Nothing here is surfaced to visitors: each page behavior logs its error
//! and the remaining behaviors keep initializing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error raised while configuring or wiring site behaviors.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The page configuration document could not be parsed.
    #[error("invalid site config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// A stored or supplied theme name is neither `light` nor `dark`.
    #[error("unrecognized theme '{0}'")]
    InvalidTheme(String),
    /// A required element was not found for the given selector.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A browser API call threw.
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
