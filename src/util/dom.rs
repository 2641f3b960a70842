//! DOM seams: class-list mutation, element lookup and click registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only ever touches the page through these traits. The
//! `hydrate` build implements them over `web-sys`; tests use the in-memory
//! page in `util::fake_dom`.

use crate::error::ChromeError;

/// An element whose class list can be read and set.
pub trait ClassTarget {
    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&self, class: &str, present: bool);
    fn has_class(&self, class: &str) -> bool;
}

/// Click handler registered on an element.
pub type ClickHandler = Box<dyn FnMut()>;

/// Finds elements in a page and attaches click handlers to them.
pub trait ElementLookup {
    type Element: ClassTarget + Clone + 'static;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Result<Option<Self::Element>, ChromeError>;
    /// The document body.
    fn body(&self) -> Option<Self::Element>;
    /// Register `handler` for clicks on `element` for the page's lifetime.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), ChromeError>;
}

/// Look up `selector`, mapping absence to [`ChromeError::MissingElement`].
pub fn require<L: ElementLookup>(lookup: &L, selector: &str) -> Result<L::Element, ChromeError> {
    lookup.query(selector)?.ok_or_else(|| ChromeError::missing(selector))
}

#[cfg(feature = "hydrate")]
impl ClassTarget for web_sys::Element {
    fn set_class(&self, class: &str, present: bool) {
        if let Err(err) = self.class_list().toggle_with_force(class, present) {
            log::warn!("class update failed: class={class} err={err:?}");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// The live browser document.
#[cfg(feature = "hydrate")]
pub struct DocumentLookup {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl DocumentLookup {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Lookup over `window.document`.
    pub fn from_window() -> Result<Self, ChromeError> {
        let window = web_sys::window().ok_or(ChromeError::NoWindow)?;
        let document = window.document().ok_or(ChromeError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

#[cfg(feature = "hydrate")]
impl ElementLookup for DocumentLookup {
    type Element = web_sys::Element;

    fn query(&self, selector: &str) -> Result<Option<Self::Element>, ChromeError> {
        self.document
            .query_selector(selector)
            .map_err(|err| ChromeError::Dom(format!("query_selector({selector}): {err:?}")))
    }

    fn body(&self) -> Option<Self::Element> {
        self.document.body().map(Into::into)
    }

    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), ChromeError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let closure = Closure::<dyn FnMut()>::wrap(handler);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| ChromeError::Dom(format!("addEventListener(click): {err:?}")))?;
        // Listeners live as long as the page.
        closure.forget();
        Ok(())
    }
}
