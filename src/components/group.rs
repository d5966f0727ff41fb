use bevy_ecs::prelude::Component;

/// Tag naming the role of a sprite in game logic ("player", "obstacle", ...).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);
