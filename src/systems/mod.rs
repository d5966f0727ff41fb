//! Engine systems.
//!
//! Submodules overview
//! - [`atlasframe`] – advance sprite-sheet frames and scroll offsets, publish UVs
//! - [`collision`] – overlap test, pairwise detection and event emission
//! - [`motion`] – step position, rotation and scale toward their targets
//! - [`time`] – count simulation ticks
//! - [`transform`] – compose model matrices

pub mod atlasframe;
pub mod collision;
pub mod motion;
pub mod time;
pub mod transform;
