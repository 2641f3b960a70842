//! Attach the controller to a page.
//!
//! Binding runs in a fixed order and stops at the first missing required
//! element:
//!
//! 1. the menu icon and navbar are looked up and the menu click handler is
//!    registered;
//! 2. the body is looked up and the stored theme applied;
//! 3. the theme switch is looked up and its click handler registered.
//!
//! Only the menu icon, body and theme switch are fatal when missing, and
//! only from the step that uses them: whatever was bound earlier stays
//! active. A missing navbar is not fatal; menu clicks are then ignored.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ChromeConfig;
use crate::controller::{ChromeElements, ThemeAndMenuController};
use crate::error::ChromeError;
use crate::util::dom::{ElementLookup, require};
use crate::util::flag_store::FlagStore;

/// Controller shared between the page's click handlers.
pub type SharedController<S, E> = Rc<RefCell<ThemeAndMenuController<S, E>>>;

/// Bind menu and theme handlers to the elements `lookup` finds.
pub fn bind<L, S>(lookup: &L, store: S, config: ChromeConfig) -> Result<SharedController<S, L::Element>, ChromeError>
where
    L: ElementLookup,
    S: FlagStore + 'static,
{
    let menu_icon = require(lookup, &config.menu_icon_selector)?;
    let navbar = lookup.query(&config.navbar_selector)?;
    if navbar.is_none() {
        log::warn!("{} not found; menu clicks will be ignored", config.navbar_selector);
    }

    let icon_target = menu_icon.clone();
    let elements = ChromeElements { menu_icon, navbar, body: None };
    let switch_selector = config.theme_switch_selector.clone();
    let controller = Rc::new(RefCell::new(ThemeAndMenuController::new(config, store, elements)));

    let shared = Rc::clone(&controller);
    lookup.on_click(
        &icon_target,
        Box::new(move || {
            with_controller(&shared, |c| {
                c.on_menu_icon_click();
            });
        }),
    )?;
    log::debug!("menu handler bound");

    let body = lookup.body().ok_or_else(|| ChromeError::missing("body"))?;
    {
        let mut c = controller.borrow_mut();
        c.attach_body(body);
        c.initialize();
    }

    let theme_switch = require(lookup, &switch_selector)?;
    let shared = Rc::clone(&controller);
    lookup.on_click(
        &theme_switch,
        Box::new(move || {
            with_controller(&shared, |c| {
                c.on_theme_switch_click();
            });
        }),
    )?;
    log::debug!("theme switch handler bound");

    Ok(controller)
}

/// Bind to the live document using `localStorage` and the page's inline
/// config, or the defaults when that block is unusable.
#[cfg(feature = "hydrate")]
pub fn bind_document() -> Result<SharedController<crate::util::flag_store::LocalFlagStore, web_sys::Element>, ChromeError> {
    use crate::util::dom::DocumentLookup;
    use crate::util::flag_store::LocalFlagStore;

    let lookup = DocumentLookup::from_window()?;
    let config = ChromeConfig::from_document(lookup.document());
    bind(&lookup, LocalFlagStore::from_window(), config)
}

fn with_controller<S, E>(shared: &SharedController<S, E>, f: impl FnOnce(&mut ThemeAndMenuController<S, E>)) {
    match shared.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::warn!("click ignored: controller busy"),
    }
}
