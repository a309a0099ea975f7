use crate::collision::AABB;
use crate::math::vec2::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circular rigid body.
///
/// Bodies are identified by `id`; the world never checks ids for uniqueness.
/// Static bodies behave as if their mass were infinite: the solver never moves
/// them, but dynamic bodies still bounce off them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigidBody {
    pub id: String,

    // Primary state
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f64,         // Radians
    pub angular_velocity: f64, // Radians per second

    // Physical properties
    pub mass: f64,
    pub radius: f64,
    pub restitution: f64, // [0, 1]
    pub is_static: bool,
}

impl RigidBody {
    pub const DEFAULT_RESTITUTION: f64 = 0.5;

    /// Creates a dynamic body at rest.
    pub fn new(id: impl Into<String>, position: Vec2, radius: f64, mass: f64) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            mass,
            radius,
            restitution: Self::DEFAULT_RESTITUTION,
            is_static: false,
        }
    }

    /// Creates a static body. Its mass is only nominal; the solver treats it as infinite.
    pub fn new_static(id: impl Into<String>, position: Vec2, radius: f64) -> Self {
        Self {
            is_static: true,
            ..Self::new(id, position, radius, 1.0)
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the bounce coefficient, clamped to [0, 1].
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Inverse mass used by the solver. Zero for static bodies.
    pub fn inv_mass(&self) -> f64 {
        if self.is_static || self.mass <= 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// World-space bounding box of the body's circle.
    pub fn aabb(&self) -> AABB {
        let extent = Vec2::new(self.radius, self.radius);
        AABB::new(self.position - extent, self.position + extent)
    }

    /// Adds `force / mass` to the velocity. Bodies with zero inverse mass
    /// (static, or `mass <= 0`) are left untouched.
    pub fn apply_impulse(&mut self, force: Vec2) {
        let inv_mass = self.inv_mass();
        if inv_mass == 0.0 {
            return;
        }
        self.velocity += force * inv_mass;
    }
}
