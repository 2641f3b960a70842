//! Leptos rendition of the page header: menu icon, navbar and theme switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages rendered with Leptos use this instead of `binding::bind`. It drives
//! the same reducer; menu classes are rendered reactively while theme effects
//! go to the document body and `localStorage` in the browser build.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

use crate::config::ChromeConfig;
use crate::controller::apply_theme;
use crate::state::chrome::{ChromeEvent, ChromeState, Effect as ChromeEffect, reduce};
use crate::state::menu::MenuState;
use crate::state::theme::ThemeFlag;
use crate::util::dom::ClassTarget;
use crate::util::flag_store::{FlagStore, write_flag};

/// Header with a mobile menu toggle and a dark mode switch. `children` are
/// rendered inside the navbar.
#[component]
pub fn SiteHeader(#[prop(optional)] config: Option<ChromeConfig>, children: Children) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let chrome = RwSignal::new(ChromeState::default());

    let dispatch = move |event: ChromeEvent| {
        let next = config.with_value(|c| dispatch_to_page(c, chrome.get_untracked(), event));
        chrome.set(next);
    };

    // Runs once on the client after mount.
    Effect::new(move || {
        let stored = config.with_value(stored_flag);
        dispatch(ChromeEvent::PageLoaded { stored });
    });

    let icon_id = config.with_value(|c| element_id(&c.menu_icon_selector, "menu-icon"));
    let switch_id = config.with_value(|c| element_id(&c.theme_switch_selector, "theme-switch"));

    view! {
        <header class="header">
            <i
                id=icon_id
                class=move || config.with_value(|c| icon_class(c, chrome.get().menu))
                on:click=move |_| dispatch(ChromeEvent::MenuIconClicked)
            ></i>
            <nav class=move || config.with_value(|c| navbar_class(c, chrome.get().menu))>
                {children()}
            </nav>
            <button
                id=switch_id
                class="theme-switch"
                on:click=move |_| {
                    let stored = config.with_value(stored_flag);
                    dispatch(ChromeEvent::ThemeSwitchClicked { stored });
                }
                title="Toggle dark mode"
            >
                {move || if chrome.get().theme.is_dark() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}

/// Class attribute for the menu icon.
pub fn icon_class(config: &ChromeConfig, menu: MenuState) -> String {
    if menu.is_open() {
        format!("bx bx-menu {}", config.menu_icon_open_class)
    } else {
        "bx bx-menu".to_owned()
    }
}

/// Class attribute for the navbar. The base class comes from a class
/// selector (`.navbar`) when configured as one.
pub fn navbar_class(config: &ChromeConfig, menu: MenuState) -> String {
    let base = config.navbar_selector.strip_prefix('.').unwrap_or("navbar");
    if menu.is_open() {
        format!("{base} {}", config.navbar_open_class)
    } else {
        base.to_owned()
    }
}

/// Element id from an id selector (`#menu-icon`), or `fallback`.
fn element_id(selector: &str, fallback: &str) -> String {
    selector.strip_prefix('#').unwrap_or(fallback).to_owned()
}

fn stored_flag(config: &ChromeConfig) -> ThemeFlag {
    #[cfg(feature = "hydrate")]
    {
        let store = crate::util::flag_store::LocalFlagStore::from_window();
        crate::util::flag_store::read_flag(&store, &config.storage_key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        ThemeFlag::Inactive
    }
}

/// Advance `state` by `event`, applying theme effects to `body` and `store`.
/// Menu effects are rendered through the class bindings above.
pub fn step<S, E>(config: &ChromeConfig, store: &S, body: Option<&E>, state: ChromeState, event: ChromeEvent) -> ChromeState
where
    S: FlagStore + ?Sized,
    E: ClassTarget + ?Sized,
{
    let (next, effects) = reduce(state, event);
    for effect in effects {
        match effect {
            ChromeEffect::ApplyTheme(theme) => {
                if let Some(body) = body {
                    apply_theme(body, config, theme);
                }
            }
            ChromeEffect::PersistTheme(theme) => write_flag(store, &config.storage_key, theme),
            ChromeEffect::ApplyMenu(_) => {}
        }
    }
    next
}

fn dispatch_to_page(config: &ChromeConfig, state: ChromeState, event: ChromeEvent) -> ChromeState {
    #[cfg(feature = "hydrate")]
    {
        let store = crate::util::flag_store::LocalFlagStore::from_window();
        let body: Option<web_sys::Element> = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(Into::into);
        step(config, &store, body.as_ref(), state, event)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        reduce(state, event).0
    }
}
