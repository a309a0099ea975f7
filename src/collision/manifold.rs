use crate::math::vec2::Vec2;

/// Stores information about an overlap between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index of the first body in the world's body list.
    pub body_a_idx: usize,
    /// Index of the second body in the world's body list.
    pub body_b_idx: usize,
    /// Unit collision normal, pointing from body B towards body A.
    pub normal: Vec2,
    /// How far the two circles overlap along the normal.
    pub depth: f64,
}
