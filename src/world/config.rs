//! World construction parameters.

use crate::collision::{SpatialGrid, AABB};
use crate::error::ConfigError;
use crate::math::vec2::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The containment rectangle `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn as_aabb(&self) -> AABB {
        AABB::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

/// How candidate pairs are gathered before the circle test.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BroadPhase {
    /// Test every unordered pair.
    #[default]
    BruteForce,
    /// Only test bodies that share a cell of a uniform grid over the bounds.
    UniformGrid { cell_size: f64 },
}

/// Parameters for [`PhysicsWorld::with_config`](crate::world::PhysicsWorld::with_config).
///
/// The defaults match [`PhysicsWorld::new`](crate::world::PhysicsWorld::new).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub bounds: WorldBounds,
    pub gravity: Vec2,
    /// Velocity multiplier applied once per (sub-)step.
    pub damping: f64,
    /// Joint relaxation passes per (sub-)step.
    pub joint_iterations: usize,
    /// Equal slices `dt` is split into.
    pub substeps: usize,
    pub broad_phase: BroadPhase,
}

impl WorldConfig {
    pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 9.81);
    pub const DEFAULT_DAMPING: f64 = 0.99;

    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            gravity: Self::DEFAULT_GRAVITY,
            damping: Self::DEFAULT_DAMPING,
            joint_iterations: 1,
            substeps: 1,
            broad_phase: BroadPhase::BruteForce,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_joint_iterations(mut self, joint_iterations: usize) -> Self {
        self.joint_iterations = joint_iterations;
        self
    }

    pub fn with_substeps(mut self, substeps: usize) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_broad_phase(mut self, broad_phase: BroadPhase) -> Self {
        self.broad_phase = broad_phase;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let WorldBounds { width, height } = self.bounds;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidBounds { width, height });
        }
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity);
        }
        if self.joint_iterations == 0 {
            return Err(ConfigError::ZeroIterations("joint_iterations"));
        }
        if self.substeps == 0 {
            return Err(ConfigError::ZeroIterations("substeps"));
        }
        if let BroadPhase::UniformGrid { cell_size } = self.broad_phase {
            if SpatialGrid::dimensions(&self.bounds.as_aabb(), cell_size).is_none() {
                return Err(ConfigError::InvalidCellSize(cell_size));
            }
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(WorldBounds::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::new(WorldBounds::new(100.0, 50.0));
        assert_eq!(config.bounds, WorldBounds::new(100.0, 50.0));
        assert_eq!(config.gravity, Vec2::new(0.0, 9.81));
        assert_eq!(config.damping, 0.99);
        assert_eq!(config.joint_iterations, 1);
        assert_eq!(config.substeps, 1);
        assert_eq!(config.broad_phase, BroadPhase::BruteForce);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builders() {
        let config = WorldConfig::new(WorldBounds::new(10.0, 10.0))
            .with_gravity(Vec2::new(0.0, -1.0))
            .with_damping(1.0)
            .with_joint_iterations(4)
            .with_substeps(2)
            .with_broad_phase(BroadPhase::UniformGrid { cell_size: 2.0 });
        assert_eq!(config.gravity, Vec2::new(0.0, -1.0));
        assert_eq!(config.damping, 1.0);
        assert_eq!(config.joint_iterations, 4);
        assert_eq!(config.substeps, 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let config = WorldConfig::new(WorldBounds::new(0.0, 10.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBounds { width: 0.0, height: 10.0 })
        );
        let config = WorldConfig::new(WorldBounds::new(10.0, f64::INFINITY));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBounds { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        let bounds = WorldBounds::new(10.0, 10.0);
        assert_eq!(
            WorldConfig::new(bounds).with_damping(1.5).validate(),
            Err(ConfigError::InvalidDamping(1.5))
        );
        assert!(matches!(
            WorldConfig::new(bounds).with_damping(f64::NAN).validate(),
            Err(ConfigError::InvalidDamping(_))
        ));
    }

    #[test]
    fn test_validate_rejects_other_fields() {
        let base = WorldConfig::new(WorldBounds::new(10.0, 10.0));
        assert_eq!(
            base.with_gravity(Vec2::new(0.0, f64::NAN)).validate(),
            Err(ConfigError::NonFiniteGravity)
        );
        assert_eq!(
            base.with_joint_iterations(0).validate(),
            Err(ConfigError::ZeroIterations("joint_iterations"))
        );
        assert_eq!(
            base.with_substeps(0).validate(),
            Err(ConfigError::ZeroIterations("substeps"))
        );
        assert_eq!(
            base.with_broad_phase(BroadPhase::UniformGrid { cell_size: -1.0 })
                .validate(),
            Err(ConfigError::InvalidCellSize(-1.0))
        );
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let small = WorldConfig::new(WorldBounds::new(100.0, 100.0));
        assert_eq!(
            small
                .with_broad_phase(BroadPhase::UniformGrid { cell_size: 1e-300 })
                .validate(),
            Err(ConfigError::InvalidCellSize(1e-300))
        );

        let screen = WorldConfig::default();
        assert_eq!(
            screen
                .with_broad_phase(BroadPhase::UniformGrid { cell_size: 0.001 })
                .validate(),
            Err(ConfigError::InvalidCellSize(0.001))
        );
        assert_eq!(
            screen
                .with_broad_phase(BroadPhase::UniformGrid { cell_size: 1.0 })
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidDamping(2.0).to_string(),
            "damping must be within [0, 1] (got 2)"
        );
        assert_eq!(
            ConfigError::ZeroIterations("substeps").to_string(),
            "substeps must be at least 1"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "bounds": { "width": 320.0, "height": 240.0 },
            "damping": 0.95,
            "broad_phase": { "UniformGrid": { "cell_size": 16.0 } }
        }"#;
        let config: WorldConfig = serde_json::from_str(json).expect("valid config json");
        assert_eq!(config.bounds, WorldBounds::new(320.0, 240.0));
        assert_eq!(config.damping, 0.95);
        assert_eq!(config.gravity, WorldConfig::DEFAULT_GRAVITY);
        assert_eq!(config.broad_phase, BroadPhase::UniformGrid { cell_size: 16.0 });
        assert_eq!(config.validate(), Ok(()));
    }
}
