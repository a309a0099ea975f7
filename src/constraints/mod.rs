use crate::objects::rigid_body::RigidBody;

pub mod joint;

pub use joint::Joint;

/// A positional constraint between bodies.
pub trait Constraint {
    /// Solves the constraint by adjusting body positions.
    /// Takes a mutable slice of all bodies in the world.
    fn solve_position(&self, bodies: &mut [RigidBody]);
}

/// Returns the index of the first body with the given id.
pub(crate) fn find_body_index(bodies: &[RigidBody], id: &str) -> Option<usize> {
    bodies.iter().position(|body| body.id == id)
}

/// Gets mutable references to two different bodies in a slice.
/// Returns `None` if the indices are equal or out of bounds.
pub(crate) fn get_mutable_body_pair(
    bodies: &mut [RigidBody],
    idx_a: usize,
    idx_b: usize,
) -> Option<(&mut RigidBody, &mut RigidBody)> {
    if idx_a == idx_b || idx_a >= bodies.len() || idx_b >= bodies.len() {
        return None;
    }

    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        Some((&mut slice_a[idx_a], &mut slice_b[0]))
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        Some((&mut slice_a[0], &mut slice_b[idx_b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    fn bodies() -> Vec<RigidBody> {
        vec![
            RigidBody::new("a", Vec2::ZERO, 1.0, 1.0),
            RigidBody::new("b", Vec2::ZERO, 1.0, 2.0),
            RigidBody::new("c", Vec2::ZERO, 1.0, 3.0),
        ]
    }

    #[test]
    fn test_find_body_index() {
        let bodies = bodies();
        assert_eq!(find_body_index(&bodies, "b"), Some(1));
        assert_eq!(find_body_index(&bodies, "zzz"), None);
    }

    #[test]
    fn test_get_mutable_body_pair_both_orders() {
        let mut bodies = bodies();
        let (a, c) = get_mutable_body_pair(&mut bodies, 0, 2).expect("valid pair");
        assert_eq!((a.id.as_str(), c.id.as_str()), ("a", "c"));
        let (c, b) = get_mutable_body_pair(&mut bodies, 2, 1).expect("valid pair");
        assert_eq!((c.id.as_str(), b.id.as_str()), ("c", "b"));
    }

    #[test]
    fn test_get_mutable_body_pair_invalid() {
        let mut bodies = bodies();
        assert!(get_mutable_body_pair(&mut bodies, 1, 1).is_none());
        assert!(get_mutable_body_pair(&mut bodies, 0, 3).is_none());
    }
}
