//! Simulation configuration resource.
//!
//! Holds the tunables of the demo scene, loaded from an INI file. Every value
//! has a default so the simulation can start without a file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! ticks = 600
//! seed = 0
//!
//! [background]
//! scroll_speed_u = 0.005
//! scroll_speed_v = 0.0
//!
//! [player]
//! columns = 4
//! rows = 1
//! frame_time = 10
//! flap_height = 0.3
//! gravity = 0.0005
//!
//! [obstacles]
//! count = 3
//! speed = 0.01
//! gap = 0.6
//!
//! [collision]
//! margin_x = 0.05
//! margin_y = 0.05
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::SpriteError;

const DEFAULT_TICKS: u64 = 600;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_SCROLL_SPEED_U: f32 = 0.005;
const DEFAULT_SCROLL_SPEED_V: f32 = 0.0;
const DEFAULT_PLAYER_COLUMNS: u32 = 4;
const DEFAULT_PLAYER_ROWS: u32 = 1;
const DEFAULT_FRAME_TIME: u32 = 10;
const DEFAULT_FLAP_HEIGHT: f32 = 0.3;
const DEFAULT_GRAVITY: f32 = 0.0005;
const DEFAULT_OBSTACLE_COUNT: u32 = 3;
const DEFAULT_OBSTACLE_SPEED: f32 = 0.01;
const DEFAULT_OBSTACLE_GAP: f32 = 0.6;
const DEFAULT_MARGIN: f32 = 0.05;
const DEFAULT_CONFIG_PATH: &str = "./spritemotion.ini";

/// Simulation configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Ticks the demo runs before exiting.
    pub ticks: u64,
    /// Seed for obstacle placement. `0` picks a random seed.
    pub seed: u64,
    /// Background scroll speed in UV units per tick.
    pub scroll_speed_u: f32,
    pub scroll_speed_v: f32,
    /// Player sprite sheet layout.
    pub player_columns: u32,
    pub player_rows: u32,
    /// Ticks each player frame is held.
    pub frame_time: u32,
    /// How far a flap lifts the player, in world units.
    pub flap_height: f32,
    /// Downward acceleration per tick while falling.
    pub gravity: f32,
    pub obstacle_count: u32,
    /// Leftward obstacle speed in world units per tick.
    pub obstacle_speed: f32,
    /// Vertical opening between the two halves of an obstacle.
    pub obstacle_gap: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            seed: DEFAULT_SEED,
            scroll_speed_u: DEFAULT_SCROLL_SPEED_U,
            scroll_speed_v: DEFAULT_SCROLL_SPEED_V,
            player_columns: DEFAULT_PLAYER_COLUMNS,
            player_rows: DEFAULT_PLAYER_ROWS,
            frame_time: DEFAULT_FRAME_TIME,
            flap_height: DEFAULT_FLAP_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            obstacle_speed: DEFAULT_OBSTACLE_SPEED,
            obstacle_gap: DEFAULT_OBSTACLE_GAP,
            margin_x: DEFAULT_MARGIN,
            margin_y: DEFAULT_MARGIN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file, then validate it.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), SpriteError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SpriteError::Config(format!("failed to load config file: {}", e)))?;
        self.apply_ini(&config);
        self.validate()?;

        info!(
            "Loaded config from {:?}: {} ticks, player {}x{} @ {} ticks/frame, {} obstacles",
            self.config_path,
            self.ticks,
            self.player_columns,
            self.player_rows,
            self.frame_time,
            self.obstacle_count
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), SpriteError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| SpriteError::Config(format!("failed to parse config: {}", e)))?;
        self.apply_ini(&config);
        self.validate()
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| -> Option<f32> {
            config.getfloat(section, key).ok().flatten().map(|v| v as f32)
        };
        let uint = |section: &str, key: &str| -> Option<u64> {
            config.getuint(section, key).ok().flatten()
        };

        // [simulation]
        if let Some(ticks) = uint("simulation", "ticks") {
            self.ticks = ticks;
        }
        if let Some(seed) = uint("simulation", "seed") {
            self.seed = seed;
        }

        // [background]
        if let Some(u) = float("background", "scroll_speed_u") {
            self.scroll_speed_u = u;
        }
        if let Some(v) = float("background", "scroll_speed_v") {
            self.scroll_speed_v = v;
        }

        // [player]
        if let Some(columns) = uint("player", "columns") {
            self.player_columns = columns as u32;
        }
        if let Some(rows) = uint("player", "rows") {
            self.player_rows = rows as u32;
        }
        if let Some(frame_time) = uint("player", "frame_time") {
            self.frame_time = frame_time as u32;
        }
        if let Some(height) = float("player", "flap_height") {
            self.flap_height = height;
        }
        if let Some(gravity) = float("player", "gravity") {
            self.gravity = gravity;
        }

        // [obstacles]
        if let Some(count) = uint("obstacles", "count") {
            self.obstacle_count = count as u32;
        }
        if let Some(speed) = float("obstacles", "speed") {
            self.obstacle_speed = speed;
        }
        if let Some(gap) = float("obstacles", "gap") {
            self.obstacle_gap = gap;
        }

        // [collision]
        if let Some(x) = float("collision", "margin_x") {
            self.margin_x = x;
        }
        if let Some(y) = float("collision", "margin_y") {
            self.margin_y = y;
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SpriteError> {
        if self.player_columns == 0 || self.player_rows == 0 {
            return Err(SpriteError::ZeroGridDimension {
                columns: self.player_columns,
                rows: self.player_rows,
            });
        }
        if self.frame_time == 0 {
            return Err(SpriteError::ZeroFrameHold);
        }
        if self.scroll_speed_u < 0.0 || self.scroll_speed_v < 0.0 {
            return Err(SpriteError::Config(
                "scroll speeds must not be negative".to_string(),
            ));
        }
        if self.gravity < 0.0 {
            return Err(SpriteError::Config("gravity must not be negative".to_string()));
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), SpriteError> {
        let mut config = Ini::new();

        config.set("simulation", "ticks", Some(self.ticks.to_string()));
        config.set("simulation", "seed", Some(self.seed.to_string()));

        config.set("background", "scroll_speed_u", Some(self.scroll_speed_u.to_string()));
        config.set("background", "scroll_speed_v", Some(self.scroll_speed_v.to_string()));

        config.set("player", "columns", Some(self.player_columns.to_string()));
        config.set("player", "rows", Some(self.player_rows.to_string()));
        config.set("player", "frame_time", Some(self.frame_time.to_string()));
        config.set("player", "flap_height", Some(self.flap_height.to_string()));
        config.set("player", "gravity", Some(self.gravity.to_string()));

        config.set("obstacles", "count", Some(self.obstacle_count.to_string()));
        config.set("obstacles", "speed", Some(self.obstacle_speed.to_string()));
        config.set("obstacles", "gap", Some(self.obstacle_gap.to_string()));

        config.set("collision", "margin_x", Some(self.margin_x.to_string()));
        config.set("collision", "margin_y", Some(self.margin_y.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| SpriteError::Config(format!("failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
