//! ECS resources made available to systems.
//!
//! Overview
//! - `atlasstore` – atlas grid definitions keyed by texture
//! - `collisionlog` – collisions seen this tick and in total
//! - `simconfig` – INI-backed simulation settings
//! - `simtick` – completed tick counter
pub mod atlasstore;
pub mod collisionlog;
pub mod simconfig;
pub mod simtick;
