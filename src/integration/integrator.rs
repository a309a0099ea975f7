use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Advances one body by `dt` using semi-implicit Euler.
///
/// Order: gravity, then velocity damping, then position and rotation.
/// Damping is applied once per call regardless of `dt`, so its strength
/// depends on the frame rate. Static bodies are skipped entirely.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, damping: f64, dt: f64) {
    if body.is_static {
        return;
    }

    // Only the vertical gravity component is applied.
    body.velocity.y += gravity.y * dt;

    body.velocity *= damping;

    body.position += body.velocity * dt;
    body.rotation += body.angular_velocity * dt;
}
