//! Error type for sprite setup.
//!
//! Every variant is raised while configuring sprites, atlases or the
//! simulation. Nothing in the per-tick path returns an error: motion steps,
//! atlas ticks and overlap tests are total functions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpriteError {
    /// An atlas grid was configured with zero columns or rows.
    #[error("atlas grid must be at least 1x1, got {columns}x{rows}")]
    ZeroGridDimension { columns: u32, rows: u32 },

    /// A frame must be held for at least one tick.
    #[error("frame hold must be at least one tick")]
    ZeroFrameHold,

    /// The configuration file could not be read, parsed or validated.
    #[error("configuration error: {0}")]
    Config(String),

    /// No atlas grid is registered under the given texture key.
    #[error("no atlas registered for texture '{0}'")]
    UnknownAtlas(String),

    /// The tick schedule failed to initialize.
    #[error("schedule initialization failed: {0}")]
    Schedule(String),
}
