use thiserror::Error;

/// Failures raised while wiring the page.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("required element `{selector}` is missing from the page")]
    MissingElement { selector: String },
    #[error("table row {row} is malformed: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error("invalid storefront configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse storefront configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl StorefrontError {
    #[must_use]
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}
