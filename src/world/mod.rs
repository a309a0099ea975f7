pub mod config;
pub mod physics_world;

pub use config::{BroadPhase, WorldBounds, WorldConfig};
pub use physics_world::PhysicsWorld;
