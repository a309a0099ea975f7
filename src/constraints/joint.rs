use super::{find_body_index, get_mutable_body_pair, Constraint};
use crate::objects::rigid_body::RigidBody;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rope-like link between two bodies, referenced by id.
///
/// The joint only pulls: when the bodies drift further apart than
/// `rest_length`, each dynamic end moves half the excess towards the other.
/// It never pushes them apart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Joint {
    pub body_a_id: String,
    pub body_b_id: String,
    pub rest_length: f64,
}

impl Joint {
    pub fn new(body_a_id: impl Into<String>, body_b_id: impl Into<String>, rest_length: f64) -> Self {
        Self {
            body_a_id: body_a_id.into(),
            body_b_id: body_b_id.into(),
            rest_length,
        }
    }

    /// True if either end of the joint is the given body.
    pub fn connects(&self, body_id: &str) -> bool {
        self.body_a_id == body_id || self.body_b_id == body_id
    }
}

impl Constraint for Joint {
    /// One relaxation pass. Joints whose bodies are missing are skipped.
    fn solve_position(&self, bodies: &mut [RigidBody]) {
        let (Some(idx_a), Some(idx_b)) = (
            find_body_index(bodies, &self.body_a_id),
            find_body_index(bodies, &self.body_b_id),
        ) else {
            log::debug!(
                "joint {} -> {} references a missing body; skipped",
                self.body_a_id,
                self.body_b_id
            );
            return;
        };

        let Some((body_a, body_b)) = get_mutable_body_pair(bodies, idx_a, idx_b) else {
            return;
        };

        let delta = body_b.position - body_a.position;
        let distance = delta.magnitude();
        if distance <= self.rest_length || distance == 0.0 {
            return;
        }

        let direction = delta * (1.0 / distance);
        let half_excess = (distance - self.rest_length) * 0.5;

        if !body_a.is_static {
            body_a.position += direction * half_excess;
        }
        if !body_b.is_static {
            body_b.position -= direction * half_excess;
        }
    }
}
