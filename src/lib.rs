//! Sprite motion library.
//!
//! Target-seeking kinematics for sprite position, rotation and scale,
//! texture atlas framing (sprite-sheet cycling and UV scrolling) and
//! margin-shrunk AABB collision, packaged as ECS components, resources,
//! systems and events. Rendering is left to the consumer, which reads
//! [`ModelMatrix`](components::modelmatrix::ModelMatrix) and
//! [`FrameUv`](components::atlasframe::FrameUv) once per tick.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
