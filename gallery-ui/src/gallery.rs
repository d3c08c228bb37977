//! Core state and synchronization logic
//!
//! Everything with nontrivial transitions or timing lives here, free of
//! rsx, so the rules run under plain `cargo test` on the native host. The
//! components in `views` stay thin over these modules.

pub mod catalog;
pub mod editor;
pub mod effects;
pub mod router;
pub mod search;
pub mod session;
pub mod settings;
pub mod theme;
