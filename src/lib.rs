//! A small 2D physics world for arcade mini-games.
//!
//! Bodies are circles. Each call to [`PhysicsWorld::step`] integrates motion,
//! separates overlapping pairs, relaxes rope joints and keeps every dynamic
//! body inside the world rectangle.

pub mod collision;
pub mod constraints;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use constraints::{Constraint, Joint};
pub use error::ConfigError;
pub use math::vec2::Vec2;
pub use objects::rigid_body::RigidBody;
pub use world::{BroadPhase, PhysicsWorld, WorldBounds, WorldConfig};
