//! Selectors, class names and storage key used by the controller.
//!
//! Defaults match the portfolio page template. A page can override any field
//! with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-chrome-config">
//!   { "storage_key": "darkmode", "navbar_selector": ".navbar" }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::ChromeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-chrome-config";

pub const DEFAULT_STORAGE_KEY: &str = "darkmode";
pub const DEFAULT_MENU_ICON_SELECTOR: &str = "#menu-icon";
pub const DEFAULT_NAVBAR_SELECTOR: &str = ".navbar";
pub const DEFAULT_THEME_SWITCH_SELECTOR: &str = "#theme-switch";
pub const DEFAULT_MENU_ICON_OPEN_CLASS: &str = "bx-x";
pub const DEFAULT_NAVBAR_OPEN_CLASS: &str = "active";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";
pub const DEFAULT_LIGHT_CLASS: &str = "light-mode";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Storage key holding the dark mode flag.
    pub storage_key: String,
    pub menu_icon_selector: String,
    pub navbar_selector: String,
    pub theme_switch_selector: String,
    /// Class toggled on the menu icon while the menu is open.
    pub menu_icon_open_class: String,
    /// Class toggled on the navbar while the menu is open.
    pub navbar_open_class: String,
    /// Body class for the dark variant.
    pub dark_class: String,
    /// Body class for the light variant.
    pub light_class: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            menu_icon_selector: DEFAULT_MENU_ICON_SELECTOR.to_owned(),
            navbar_selector: DEFAULT_NAVBAR_SELECTOR.to_owned(),
            theme_switch_selector: DEFAULT_THEME_SWITCH_SELECTOR.to_owned(),
            menu_icon_open_class: DEFAULT_MENU_ICON_OPEN_CLASS.to_owned(),
            navbar_open_class: DEFAULT_NAVBAR_OPEN_CLASS.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            light_class: DEFAULT_LIGHT_CLASS.to_owned(),
        }
    }
}

impl ChromeConfig {
    /// Parse a config block. Missing fields keep their defaults; blank input
    /// yields the default config.
    pub fn from_json(raw: &str) -> Result<Self, ChromeError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional config block. An invalid block is logged and
    /// replaced by the defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    /// Read the inline config block from the current document, if present.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
        Self::from_json_or_default(raw.as_deref())
    }
}
