//! Target-seeking kinematic state.
//!
//! A [`KinematicAxis`] drives one scalar (one component of position, rotation
//! or scale) toward a target with a current speed and a constant
//! acceleration. Three axes form a [`KinematicGroup`], which is what the
//! [`MapPosition`](super::mapposition::MapPosition),
//! [`Rotation`](super::rotation::Rotation) and [`Scale`](super::scale::Scale)
//! components wrap.
//!
//! # Gating
//!
//! Before each step the axis checks [`KinematicAxis::can_move`]. When the
//! check fails the speed is zeroed and the value stays where it is. There is
//! no snapping to the target: an axis whose last step carried it past the
//! target simply freezes there. Callers that need an exact landing pick
//! speeds and accelerations that hit the target on a tick boundary, or reset
//! `target` and `acceleration` themselves.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One scalar driven toward `target`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicAxis {
    pub current: f32,
    pub target: f32,
    pub speed: f32,
    pub acceleration: f32,
}

impl KinematicAxis {
    /// An axis resting at `value` (target equal to current, no motion).
    pub fn at(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            speed: 0.0,
            acceleration: 0.0,
        }
    }

    /// Whether continued motion toward the target is still consistent with
    /// the signs of speed and acceleration.
    ///
    /// True when all of the following hold:
    /// - the value lies on the side of the target that speed or acceleration
    ///   pushes toward it,
    /// - `target * speed >= 0`,
    /// - `speed * acceleration >= 0`.
    pub fn can_move(&self) -> bool {
        let Self {
            current,
            target,
            speed,
            acceleration,
        } = *self;

        let heading_to_target = (current < target && (speed > 0.0 || acceleration > 0.0))
            || (current > target && (speed < 0.0 || acceleration < 0.0));

        heading_to_target && target * speed >= 0.0 && speed * acceleration >= 0.0
    }

    /// Advance one tick.
    ///
    /// Applies acceleration to speed and speed to the value when
    /// [`can_move`](Self::can_move) holds; otherwise zeroes the speed.
    /// `current` and `acceleration` are left untouched when frozen.
    pub fn step(&mut self) {
        if self.can_move() {
            self.speed += self.acceleration;
            self.current += self.speed;
        } else {
            self.speed = 0.0;
        }
    }

    /// Point the axis at a new target with the given speed and acceleration.
    pub fn seek(&mut self, target: f32, speed: f32, acceleration: f32) {
        self.target = target;
        self.speed = speed;
        self.acceleration = acceleration;
    }

    /// Stop all motion and make the current value the target.
    pub fn settle(&mut self) {
        self.target = self.current;
        self.speed = 0.0;
        self.acceleration = 0.0;
    }
}

/// Three independent axes (x, y, z) of one attribute.
///
/// Axes never influence each other; each runs its own gate every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicGroup {
    pub axes: [KinematicAxis; 3],
}

impl KinematicGroup {
    /// A group resting at `value`.
    pub fn at(value: Vec3) -> Self {
        Self {
            axes: [
                KinematicAxis::at(value.x),
                KinematicAxis::at(value.y),
                KinematicAxis::at(value.z),
            ],
        }
    }

    pub fn x(&self) -> &KinematicAxis {
        &self.axes[0]
    }
    pub fn y(&self) -> &KinematicAxis {
        &self.axes[1]
    }
    pub fn z(&self) -> &KinematicAxis {
        &self.axes[2]
    }
    pub fn x_mut(&mut self) -> &mut KinematicAxis {
        &mut self.axes[0]
    }
    pub fn y_mut(&mut self) -> &mut KinematicAxis {
        &mut self.axes[1]
    }
    pub fn z_mut(&mut self) -> &mut KinematicAxis {
        &mut self.axes[2]
    }

    /// Current values as a vector.
    pub fn current(&self) -> Vec3 {
        Vec3::new(
            self.axes[0].current,
            self.axes[1].current,
            self.axes[2].current,
        )
    }

    pub fn target(&self) -> Vec3 {
        Vec3::new(self.axes[0].target, self.axes[1].target, self.axes[2].target)
    }

    pub fn speed(&self) -> Vec3 {
        Vec3::new(self.axes[0].speed, self.axes[1].speed, self.axes[2].speed)
    }

    /// Teleport all axes without touching targets or motion.
    pub fn set_current(&mut self, value: Vec3) {
        for (axis, v) in self.axes.iter_mut().zip(value.to_array()) {
            axis.current = v;
        }
    }

    pub fn set_target(&mut self, value: Vec3) {
        for (axis, v) in self.axes.iter_mut().zip(value.to_array()) {
            axis.target = v;
        }
    }

    pub fn set_speed(&mut self, value: Vec3) {
        for (axis, v) in self.axes.iter_mut().zip(value.to_array()) {
            axis.speed = v;
        }
    }

    pub fn set_acceleration(&mut self, value: Vec3) {
        for (axis, v) in self.axes.iter_mut().zip(value.to_array()) {
            axis.acceleration = v;
        }
    }

    /// Step every axis once.
    pub fn step(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.step();
        }
    }

    /// True if any axis has a non-zero speed.
    pub fn is_moving(&self) -> bool {
        self.axes.iter().any(|a| a.speed != 0.0)
    }
}
