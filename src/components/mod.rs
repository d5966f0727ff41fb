//! ECS components for sprites.
//!
//! Submodules overview:
//! - [`atlasframe`] – sprite-sheet cycling and UV scrolling state, and the produced UVs
//! - [`boxcollider`] – collision margin and the derived bounding box
//! - [`group`] – tag component naming an entity's role
//! - [`kinematic`] – target-seeking scalar axes and 3-axis groups
//! - [`mapposition`] – world-space position
//! - [`modelmatrix`] – world transform for the renderer
//! - [`rotation`] – rotation angles in degrees
//! - [`scale`] – per-axis scale
//! - [`sprite`] – texture key and the full sprite bundle
//! - [`tint`] – color modulation

pub mod atlasframe;
pub mod boxcollider;
pub mod group;
pub mod kinematic;
pub mod mapposition;
pub mod modelmatrix;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod tint;
