//! Theme and menu controller: the reducer wired to storage and elements.
//!
//! The controller owns the current [`ChromeState`], reads the persisted flag
//! when an event needs it, runs [`reduce`], and applies each resulting
//! [`Effect`] to the body, the menu elements and the store before returning.
//! A handler invocation therefore leaves the page and the store consistent.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ChromeConfig;
use crate::state::chrome::{ChromeEvent, ChromeState, Effect, reduce};
use crate::state::menu::MenuState;
use crate::state::theme::{Theme, ThemeFlag};
use crate::util::dom::ClassTarget;
use crate::util::flag_store::{FlagStore, read_flag, write_flag};

/// Elements the controller mutates.
///
/// Only the menu icon is required up front. A missing navbar makes menu
/// clicks inert; the body is attached once binding has found it.
pub struct ChromeElements<E> {
    pub menu_icon: E,
    pub navbar: Option<E>,
    pub body: Option<E>,
}

pub struct ThemeAndMenuController<S, E> {
    config: ChromeConfig,
    store: S,
    elements: ChromeElements<E>,
    state: ChromeState,
}

impl<S: FlagStore, E: ClassTarget> ThemeAndMenuController<S, E> {
    /// Create a controller in the default state. Nothing is applied until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(config: ChromeConfig, store: S, elements: ChromeElements<E>) -> Self {
        Self { config, store, elements, state: ChromeState::default() }
    }

    #[must_use]
    pub fn state(&self) -> ChromeState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// Attach the body element that theme classes are applied to.
    pub fn attach_body(&mut self, body: E) {
        self.elements.body = Some(body);
    }

    /// Apply the theme selected by the persisted flag.
    pub fn initialize(&mut self) -> Theme {
        let stored = self.stored_flag();
        self.dispatch(ChromeEvent::PageLoaded { stored });
        log::debug!("theme initialized: stored={stored:?} theme={:?}", self.state.theme);
        self.state.theme
    }

    /// Flip the menu icon and navbar together. Without a navbar neither
    /// element changes.
    pub fn on_menu_icon_click(&mut self) -> MenuState {
        if self.elements.navbar.is_none() {
            log::warn!("menu click ignored: {} not found", self.config.navbar_selector);
            return self.state.menu;
        }
        self.dispatch(ChromeEvent::MenuIconClicked);
        self.state.menu
    }

    /// Re-read the flag and switch to the opposite theme, persisting it.
    pub fn on_theme_switch_click(&mut self) -> Theme {
        let stored = self.stored_flag();
        self.dispatch(ChromeEvent::ThemeSwitchClicked { stored });
        log::debug!("theme switched: stored={stored:?} theme={:?}", self.state.theme);
        self.state.theme
    }

    /// Run one event through the reducer and apply its effects.
    pub fn dispatch(&mut self, event: ChromeEvent) {
        let (next, effects) = reduce(self.state, event);
        self.state = next;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn stored_flag(&self) -> ThemeFlag {
        read_flag(&self.store, &self.config.storage_key)
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::ApplyTheme(theme) => match self.elements.body.as_ref() {
                Some(body) => apply_theme(body, &self.config, theme),
                None => log::warn!("theme not applied: no body attached"),
            },
            Effect::PersistTheme(theme) => write_flag(&self.store, &self.config.storage_key, theme),
            Effect::ApplyMenu(menu) => {
                if let Some(navbar) = self.elements.navbar.as_ref() {
                    apply_menu(&self.elements.menu_icon, navbar, &self.config, menu);
                }
            }
        }
    }
}

/// Set exactly one of the dark/light classes on `body`.
pub fn apply_theme<E: ClassTarget + ?Sized>(body: &E, config: &ChromeConfig, theme: Theme) {
    body.set_class(&config.dark_class, theme.is_dark());
    body.set_class(&config.light_class, !theme.is_dark());
}

/// Set the open classes on the icon and navbar in lock-step.
pub fn apply_menu<E: ClassTarget + ?Sized>(icon: &E, navbar: &E, config: &ChromeConfig, menu: MenuState) {
    icon.set_class(&config.menu_icon_open_class, menu.is_open());
    navbar.set_class(&config.navbar_open_class, menu.is_open());
}
