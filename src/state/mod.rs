//! Page chrome state modules.
//!
//! DESIGN
//! ======
//! Menu and theme are modeled separately and combined by the `chrome`
//! reducer, so neither toggle depends on the other's representation.

pub mod chrome;
pub mod menu;
pub mod theme;
