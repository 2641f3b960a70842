//! Theme variant and the persisted dark mode flag.
//!
//! The flag is a single string in browser storage. Only the exact value
//! `"active"` means dark; everything else (absent, empty, the legacy `"null"`
//! string written by older pages) means light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Stored value that marks dark mode as enabled.
pub const ACTIVE_VALUE: &str = "active";

/// Visual theme variant applied to the document body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Flag value that persists this variant.
    #[must_use]
    pub fn flag(self) -> ThemeFlag {
        match self {
            Theme::Light => ThemeFlag::Inactive,
            Theme::Dark => ThemeFlag::Active,
        }
    }
}

/// Parsed form of the persisted `darkmode` flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeFlag {
    Active,
    #[default]
    Inactive,
}

impl ThemeFlag {
    /// Interpret a raw storage read.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(ACTIVE_VALUE) => ThemeFlag::Active,
            _ => ThemeFlag::Inactive,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == ThemeFlag::Active
    }

    /// Theme this flag selects on load.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ThemeFlag::Active => Theme::Dark,
            ThemeFlag::Inactive => Theme::Light,
        }
    }
}
