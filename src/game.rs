//! Demo scene and tick loop.
//!
//! Builds a small flappy-style scene on top of the sprite core:
//! - a background whose texture scrolls continuously,
//! - a player with a sprite-sheet animation that flaps up and falls back
//!   down, tilting as it goes,
//! - pairs of obstacles sliding left and recycled to the right with a new
//!   random gap once they leave the screen.
//!
//! All motion is scripted by setting targets, speeds and accelerations on
//! the kinematic axes; the core systems do the rest. Collisions between the
//! player and the obstacles are counted, not acted upon.
//!
//! World space spans `[-2, 2]` horizontally and `[-1, 1]` vertically.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};
use log::{debug, error, info};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::components::atlasframe::{AtlasFrameState, FrameUv, UvRect};
use crate::components::boxcollider::CollisionMargin;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::SpriteBundle;
use crate::components::tint::Tint;
use crate::error::SpriteError;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::collisionlog::CollisionLog;
use crate::resources::simconfig::SimConfig;
use crate::resources::simtick::SimTick;
use crate::systems::atlasframe::atlas_frame_system;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::motion::{position_motion_system, rotation_motion_system, scale_motion_system};
use crate::systems::time::advance_tick;
use crate::systems::transform::model_matrix_system;

pub const BACKGROUND_TEX: &str = "background";
pub const PLAYER_TEX: &str = "player";
pub const OBSTACLE_TEX: &str = "obstacle";

pub const WORLD_RIGHT: f32 = 2.0;
pub const CEILING: f32 = 1.0;
pub const FLOOR: f32 = -1.0;
/// Obstacles are recycled once their center passes this x.
pub const EXIT_X: f32 = -2.5;

const PLAYER_X: f32 = -1.0;
const PLAYER_HALF_SIZE: f32 = 0.1;
const OBSTACLE_HALF_WIDTH: f32 = 0.1;
const OBSTACLE_HALF_HEIGHT: f32 = 1.0;
/// Horizontal distance covered by one full obstacle cycle.
const OBSTACLE_SPAN: f32 = WORLD_RIGHT - EXIT_X + 0.5;
/// Ticks a flap takes to reach its full height.
const FLAP_TICKS: f32 = 10.0;
const FLAP_TILT: f32 = 20.0;
const FLAP_TILT_SPEED: f32 = 4.0;
const DIVE_TILT: f32 = -60.0;
const DIVE_TILT_ACCELERATION: f32 = -0.25;
/// Player alpha while overlapping an obstacle.
const HIT_ALPHA: f32 = 0.5;
const OBSTACLE_TINT: Tint = Tint {
    color: glam::Vec4::new(0.4, 0.8, 0.3, 1.0),
};

/// Flap state of the player.
#[derive(Component, Debug, Default)]
pub struct Flapper {
    /// Height the current flap started from, while rising.
    pub rising_from: Option<f32>,
}

/// One half of an obstacle pair.
#[derive(Component, Debug, Clone, Copy)]
pub struct Obstacle {
    /// Pair index; both halves of a pair share it.
    pub slot: u32,
    pub upper: bool,
    /// Vertical center of the opening between the two halves.
    pub gap_center: f32,
}

/// Random source for obstacle placement.
#[derive(Resource)]
pub struct DemoRng(pub fastrand::Rng);

/// Running totals of the demo.
#[derive(Resource, Debug, Default, Clone, Serialize)]
pub struct DemoStats {
    pub ticks: u64,
    pub flaps: u64,
    pub obstacles_passed: u64,
    /// Ticks during which the player overlapped an obstacle.
    pub collision_ticks: u64,
}

/// One line of the per-tick trace.
#[derive(Debug, Serialize)]
pub struct TickTrace {
    pub tick: u64,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub uv: UvRect,
    pub tint: [f32; 4],
    pub collisions: usize,
}

fn random_gap_center(rng: &mut fastrand::Rng, gap: f32) -> f32 {
    let limit = (CEILING - gap * 0.5 - PLAYER_HALF_SIZE).max(0.0);
    (rng.f32() * 2.0 - 1.0) * limit
}

/// Center height of an obstacle half around a gap.
fn obstacle_y(gap_center: f32, gap: f32, upper: bool) -> f32 {
    let offset = gap * 0.5 + OBSTACLE_HALF_HEIGHT;
    if upper {
        gap_center + offset
    } else {
        gap_center - offset
    }
}

/// Point the player's vertical axis up toward the ceiling at flap speed.
fn start_flap(position: &mut MapPosition, rotation: &mut Rotation, flap_height: f32) {
    position
        .motion
        .y_mut()
        .seek(CEILING, flap_height / FLAP_TICKS, 0.0);
    rotation.motion.z_mut().seek(FLAP_TILT, FLAP_TILT_SPEED, 0.0);
}

/// Let the player fall toward the floor, nosing down.
fn start_fall(position: &mut MapPosition, rotation: &mut Rotation, gravity: f32) {
    position.motion.y_mut().seek(FLOOR, 0.0, -gravity);
    rotation
        .motion
        .z_mut()
        .seek(DIVE_TILT, 0.0, DIVE_TILT_ACCELERATION);
}

/// Register atlases and spawn the scene described by [`SimConfig`].
pub fn setup(world: &mut World) -> Result<(), SpriteError> {
    let config = world.resource::<SimConfig>().clone();
    config.validate()?;

    let mut store = AtlasStore::new();
    store.register(BACKGROUND_TEX, 1, 1)?;
    store.register(PLAYER_TEX, config.player_columns, config.player_rows)?;
    store.register(OBSTACLE_TEX, 1, 1)?;

    world.spawn((
        SpriteBundle::new(BACKGROUND_TEX)
            .with_scale(WORLD_RIGHT, CEILING)
            .with_atlas(AtlasFrameState::scrolling(Vec2::new(
                config.scroll_speed_u,
                config.scroll_speed_v,
            ))),
        Group("background"),
    ));

    let mut player = SpriteBundle::new(PLAYER_TEX)
        .with_position(PLAYER_X, 0.0)
        .with_scale(PLAYER_HALF_SIZE, PLAYER_HALF_SIZE)
        .with_atlas(store.animation_for(PLAYER_TEX, config.frame_time)?);
    start_fall(&mut player.position, &mut player.rotation, config.gravity);
    world.spawn((
        player,
        CollisionMargin::new(config.margin_x, config.margin_y),
        Group("player"),
        Flapper::default(),
    ));

    let count = config.obstacle_count;
    let spacing = if count > 0 {
        OBSTACLE_SPAN / count as f32
    } else {
        0.0
    };
    for slot in 0..count {
        let gap_center = {
            let mut rng = world.resource_mut::<DemoRng>();
            random_gap_center(&mut rng.0, config.obstacle_gap)
        };
        let x = WORLD_RIGHT + slot as f32 * spacing;
        for upper in [false, true] {
            let mut bundle = SpriteBundle::new(OBSTACLE_TEX)
                .with_position(x, obstacle_y(gap_center, config.obstacle_gap, upper))
                .with_scale(OBSTACLE_HALF_WIDTH, OBSTACLE_HALF_HEIGHT)
                .with_tint(OBSTACLE_TINT);
            bundle
                .position
                .motion
                .x_mut()
                .seek(EXIT_X, -config.obstacle_speed, 0.0);
            world.spawn((
                bundle,
                CollisionMargin::new(config.margin_x, config.margin_y),
                Group("obstacle"),
                Obstacle {
                    slot,
                    upper,
                    gap_center,
                },
            ));
        }
    }

    info!(
        "Scene ready: player {}x{} frames, {} obstacle pairs",
        config.player_columns, config.player_rows, count
    );
    world.insert_resource(store);
    Ok(())
}

/// Flap whenever the player sinks below the opening of the next obstacle,
/// and fall again once a flap has gained its full height. Each flap restarts
/// the player's wing animation.
pub fn autopilot_system(
    mut players: Query<(
        &mut MapPosition,
        &mut Rotation,
        &mut AtlasFrameState,
        &mut Flapper,
    )>,
    obstacles: Query<(&MapPosition, &Obstacle), Without<Flapper>>,
    config: Res<SimConfig>,
    mut stats: ResMut<DemoStats>,
) {
    for (mut position, mut rotation, mut atlas, mut flapper) in players.iter_mut() {
        let Vec3 { x, y, .. } = position.pos();
        let aim = obstacles
            .iter()
            .filter(|(p, o)| !o.upper && p.pos().x + OBSTACLE_HALF_WIDTH > x)
            .min_by(|a, b| a.0.pos().x.total_cmp(&b.0.pos().x))
            .map(|(_, o)| o.gap_center)
            .unwrap_or(0.0);

        match flapper.rising_from {
            Some(start) => {
                let stalled = position.motion.y().speed == 0.0;
                if y >= start + config.flap_height || stalled {
                    start_fall(&mut position, &mut rotation, config.gravity);
                    flapper.rising_from = None;
                }
            }
            None => {
                if y < aim - config.flap_height * 0.5 {
                    start_flap(&mut position, &mut rotation, config.flap_height);
                    atlas.rewind();
                    flapper.rising_from = Some(y);
                    stats.flaps += 1;
                }
            }
        }
    }
}

/// Move obstacle pairs that left the screen back to the right with a new gap.
pub fn recycle_obstacles_system(
    mut obstacles: Query<(&mut MapPosition, &mut Obstacle)>,
    mut rng: ResMut<DemoRng>,
    config: Res<SimConfig>,
    mut stats: ResMut<DemoStats>,
) {
    let mut new_gaps: FxHashMap<u32, f32> = FxHashMap::default();
    for (position, obstacle) in obstacles.iter() {
        if position.pos().x <= EXIT_X {
            new_gaps
                .entry(obstacle.slot)
                .or_insert_with(|| random_gap_center(&mut rng.0, config.obstacle_gap));
        }
    }
    if new_gaps.is_empty() {
        return;
    }

    for (mut position, mut obstacle) in obstacles.iter_mut() {
        let Some(&gap_center) = new_gaps.get(&obstacle.slot) else {
            continue;
        };
        let x = position.pos().x + OBSTACLE_SPAN;
        let y = obstacle_y(gap_center, config.obstacle_gap, obstacle.upper);
        position.motion.set_current(Vec3::new(x, y, 0.0));
        position.motion.y_mut().settle();
        position
            .motion
            .x_mut()
            .seek(EXIT_X, -config.obstacle_speed, 0.0);
        obstacle.gap_center = gap_center;
    }
    stats.obstacles_passed += new_gaps.len() as u64;
    debug!("Recycled {} obstacle pair(s)", new_gaps.len());
}

/// Count ticks in which the player touched an obstacle, and fade the player
/// while it does.
pub fn crash_counter_system(
    log: Res<CollisionLog>,
    mut players: Query<(Entity, &mut Tint), With<Flapper>>,
    tick: Res<SimTick>,
    mut stats: ResMut<DemoStats>,
) {
    for (player, mut tint) in players.iter_mut() {
        let hit = log.involves(player);
        if hit {
            stats.collision_ticks += 1;
            debug!("Player hit an obstacle on tick {}", tick.tick);
        }
        *tint = tint.with_alpha(if hit { HIT_ALPHA } else { 1.0 });
    }
}

/// Create a world with all resources and observers, and spawn the scene.
pub fn build_world(config: SimConfig) -> Result<World, SpriteError> {
    let rng = match config.seed {
        0 => fastrand::Rng::new(),
        seed => fastrand::Rng::with_seed(seed),
    };

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(SimTick::default());
    world.insert_resource(CollisionLog::default());
    world.insert_resource(DemoStats::default());
    world.insert_resource(DemoRng(rng));
    world.add_observer(collision_observer);
    setup(&mut world)?;
    world.flush();
    Ok(world)
}

/// The per-tick schedule.
///
/// Game logic sets targets first, then motion advances (rotation, position,
/// scale), then the derived outputs (model matrix, frame UVs) and collisions
/// are computed from the new values.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (recycle_obstacles_system, autopilot_system)
            .chain()
            .before(rotation_motion_system),
    );
    update.add_systems(
        (
            rotation_motion_system,
            position_motion_system,
            scale_motion_system,
        )
            .chain(),
    );
    update.add_systems(model_matrix_system.after(scale_motion_system));
    update.add_systems(atlas_frame_system);
    update.add_systems(collision_detector.after(scale_motion_system));
    update.add_systems(crash_counter_system.after(collision_detector));
    update
}

/// Run one simulation tick.
pub fn run_tick(world: &mut World, schedule: &mut Schedule) {
    world.resource_mut::<CollisionLog>().begin_tick();
    schedule.run(world);
    advance_tick(world);
    world.clear_trackers();
}

/// Snapshot of the player for the trace output.
pub fn trace_tick(world: &mut World) -> Option<TickTrace> {
    let tick = world.resource::<SimTick>().tick;
    let collisions = world.resource::<CollisionLog>().pairs.len();
    let mut query =
        world.query_filtered::<(&MapPosition, &Rotation, &Scale, &FrameUv, &Tint), With<Flapper>>();
    let (position, rotation, scale, frame_uv, tint) = query.iter(world).next()?;
    Some(TickTrace {
        tick,
        position: position.pos().to_array(),
        rotation: rotation.degrees().to_array(),
        scale: scale.scale().to_array(),
        uv: frame_uv.uv,
        tint: tint.as_array(),
        collisions,
    })
}

/// Run the demo for the configured number of ticks.
///
/// With `trace` set, one JSON line per tick describing the player is printed
/// to stdout.
pub fn run(config: SimConfig, trace: bool) -> Result<DemoStats, SpriteError> {
    let ticks = config.ticks;
    let mut world = build_world(config)?;
    let mut schedule = build_schedule();
    schedule
        .initialize(&mut world)
        .map_err(|e| SpriteError::Schedule(ToString::to_string(&e)))?;

    for _ in 0..ticks {
        run_tick(&mut world, &mut schedule);
        if trace {
            if let Some(line) = trace_tick(&mut world) {
                match serde_json::to_string(&line) {
                    Ok(json) => println!("{}", json),
                    Err(e) => error!("Failed to serialize trace: {}", e),
                }
            }
        }
    }

    let mut stats = world.resource::<DemoStats>().clone();
    stats.ticks = world.resource::<SimTick>().tick;
    Ok(stats)
}
