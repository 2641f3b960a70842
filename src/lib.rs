//! # site-chrome
//!
//! Leptos + WASM page chrome for the portfolio site: a mobile navigation
//! menu toggle and a dark mode switch whose choice persists in
//! `localStorage` under the `darkmode` key.
//!
//! Server-rendered pages load the WASM module and call [`bind_page`], which
//! binds the controller to the existing `#menu-icon`, `.navbar` and
//! `#theme-switch` elements. Leptos apps render
//! [`components::site_header::SiteHeader`] instead.
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Menu/theme state and the pure reducer |
//! | [`controller`] | Reducer wired to storage and elements |
//! | [`binding`] | Element lookup and click handler registration |
//! | [`config`] | Selectors, class names and storage key |
//! | [`util`] | Storage and DOM traits with browser implementations |
//! | [`components`] | Leptos header component |

pub mod binding;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod util;

pub use config::ChromeConfig;
pub use controller::ThemeAndMenuController;
pub use error::ChromeError;

/// Install the panic hook and console logger, then bind to the current page.
///
/// Binding errors are logged, not thrown; whatever was bound before the
/// failure keeps working.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn bind_page() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);

    match binding::bind_document() {
        Ok(controller) => {
            let state = controller.borrow().state();
            log::info!("site chrome bound: theme={:?}", state.theme);
        }
        Err(err) => log::error!("site chrome binding failed: {err}"),
    }
}
