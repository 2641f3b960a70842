//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Whether the mobile navbar panel is showing.
///
/// Not persisted; every page load starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}
