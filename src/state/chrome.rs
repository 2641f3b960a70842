//! Page chrome state machine.
//!
//! DESIGN
//! ======
//! Two independent binary states (menu, theme) advance only on explicit
//! events. `reduce` is pure: it returns the next state and the side effects
//! the host must perform, so the whole machine is testable without a DOM.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use super::menu::MenuState;
use super::theme::{Theme, ThemeFlag};

/// Combined menu and theme state for one page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub menu: MenuState,
    pub theme: Theme,
}

/// Inputs to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeEvent {
    /// Page finished loading; `stored` is the flag read at that moment.
    PageLoaded { stored: ThemeFlag },
    /// The menu icon was clicked.
    MenuIconClicked,
    /// The theme switch was clicked; `stored` is the flag re-read on click.
    ThemeSwitchClicked { stored: ThemeFlag },
}

/// Side effects requested by [`reduce`], applied in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Set body classes for this variant.
    ApplyTheme(Theme),
    /// Write the flag for this variant to storage.
    PersistTheme(Theme),
    /// Set the open class on the icon and navbar together.
    ApplyMenu(MenuState),
}

/// Advance `state` by one event.
#[must_use]
pub fn reduce(state: ChromeState, event: ChromeEvent) -> (ChromeState, Vec<Effect>) {
    match event {
        ChromeEvent::PageLoaded { stored } => {
            let theme = stored.theme();
            (ChromeState { theme, ..state }, vec![Effect::ApplyTheme(theme), Effect::PersistTheme(theme)])
        }
        ChromeEvent::MenuIconClicked => {
            let menu = state.menu.toggled();
            (ChromeState { menu, ..state }, vec![Effect::ApplyMenu(menu)])
        }
        ChromeEvent::ThemeSwitchClicked { stored } => {
            // The stored flag wins over in-memory state so changes made in
            // another tab since load are respected.
            let theme = stored.theme().toggled();
            (ChromeState { theme, ..state }, vec![Effect::ApplyTheme(theme), Effect::PersistTheme(theme)])
        }
    }
}
