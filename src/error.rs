//! Error type for binding and configuration.

/// Failures that stop the chrome controller from binding.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    /// A required element is not in the document. Binding stops here; any
    /// handler registered before this point stays active.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// The inline configuration block is not valid `ChromeConfig` JSON.
    #[error("invalid chrome config: {0}")]
    Config(#[from] serde_json::Error),
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl ChromeError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}
