//! Browser boundary helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage and DOM access are isolated here behind small traits so the
//! controller and reducer never touch `web-sys` directly.

pub mod dom;
#[cfg(test)]
pub mod fake_dom;
pub mod flag_store;
