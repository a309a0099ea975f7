use super::manifold::CollisionManifold;
use crate::objects::rigid_body::RigidBody;

/// Checks for overlap between two circular bodies.
///
/// Returns a manifold when the center distance is strictly less than the sum of
/// the radii. Bodies whose centers coincide exactly have no usable normal and
/// are reported as not colliding.
pub fn check_circle_circle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let dist_vec = body_a.position - body_b.position;
    let dist_sq = dist_vec.magnitude_squared();
    let radii_sum = body_a.radius + body_b.radius;

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    if distance == 0.0 {
        log::debug!(
            "bodies '{}' and '{}' share a center; skipping resolution",
            body_a.id,
            body_b.id
        );
        return None;
    }

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal: dist_vec * (1.0 / distance),
        depth: radii_sum - distance,
    })
}
