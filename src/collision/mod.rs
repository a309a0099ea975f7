pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod spatial_grid;

// Re-export key types
pub use aabb::AABB;
pub use detection::check_circle_circle;
pub use manifold::CollisionManifold;
pub use spatial_grid::SpatialGrid;
