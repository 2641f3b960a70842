//! In-memory page used by tests in place of the browser document.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::dom::{ClassTarget, ClickHandler, ElementLookup};
use crate::error::ChromeError;

/// Element with a shared class set. Clones refer to the same element.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::default();
        for class in classes {
            element.set_class(class, true);
        }
        element
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    fn same(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.classes, &other.classes)
    }
}

impl ClassTarget for FakeElement {
    fn set_class(&self, class: &str, present: bool) {
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

/// Page with selector-addressed elements, a body and registered click handlers.
#[derive(Default)]
pub struct FakePage {
    elements: HashMap<String, FakeElement>,
    body: Option<FakeElement>,
    handlers: RefCell<Vec<(FakeElement, ClickHandler)>>,
}

impl FakePage {
    /// Page with `#menu-icon`, `.navbar`, `#theme-switch` and a body.
    pub fn standard() -> Self {
        Self::default()
            .with("#menu-icon", FakeElement::with_classes(&["bx", "bx-menu"]))
            .with(".navbar", FakeElement::default())
            .with("#theme-switch", FakeElement::default())
            .with_body(FakeElement::default())
    }

    pub fn with(mut self, selector: &str, element: FakeElement) -> Self {
        self.elements.insert(selector.to_owned(), element);
        self
    }

    pub fn with_body(mut self, body: FakeElement) -> Self {
        self.body = Some(body);
        self
    }

    pub fn without(mut self, selector: &str) -> Self {
        self.elements.remove(selector);
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn element(&self, selector: &str) -> FakeElement {
        self.elements.get(selector).cloned().unwrap_or_default()
    }

    pub fn body_element(&self) -> FakeElement {
        self.body.clone().unwrap_or_default()
    }

    /// Number of click handlers registered on `selector`.
    pub fn handler_count(&self, selector: &str) -> usize {
        let Some(target) = self.elements.get(selector) else {
            return 0;
        };
        self.handlers.borrow().iter().filter(|(el, _)| el.same(target)).count()
    }

    /// Fire every click handler registered on `selector`.
    pub fn click(&self, selector: &str) {
        let Some(target) = self.elements.get(selector).cloned() else {
            return;
        };
        let mut handlers = self.handlers.borrow_mut();
        for (element, handler) in handlers.iter_mut() {
            if element.same(&target) {
                handler();
            }
        }
    }
}

impl ElementLookup for FakePage {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Result<Option<FakeElement>, ChromeError> {
        Ok(self.elements.get(selector).cloned())
    }

    fn body(&self) -> Option<FakeElement> {
        self.body.clone()
    }

    fn on_click(&self, element: &FakeElement, handler: ClickHandler) -> Result<(), ChromeError> {
        self.handlers.borrow_mut().push((element.clone(), handler));
        Ok(())
    }
}
