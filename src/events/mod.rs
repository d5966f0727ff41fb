//! Event types exchanged between systems and game logic.
//!
//! Submodules:
//! - [`collision`] – overlap notifications emitted by the collision detector
pub mod collision;
