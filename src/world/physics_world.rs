use crate::{
    collision::{self, CollisionManifold, SpatialGrid},
    constraints::{self, Constraint, Joint},
    error::ConfigError,
    integration::integrator,
    math::vec2::Vec2,
    objects::rigid_body::RigidBody,
};

use super::config::{BroadPhase, WorldBounds, WorldConfig};

/// A bounded 2D world of circular bodies and rope joints.
///
/// `step` is the only operation that advances time. Nothing here fails at
/// runtime: unknown ids and degenerate pairs are skipped so a render loop can
/// keep calling `step` every frame.
#[derive(Debug)]
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    joints: Vec<Joint>,
    bounds: WorldBounds,
    gravity: Vec2,
    damping: f64,
    joint_iterations: usize,
    substeps: usize,
    grid: Option<SpatialGrid>,
    // Overlaps resolved during the last step
    contacts: Vec<CollisionManifold>,
}

impl PhysicsWorld {
    /// Creates an empty world with gravity `(0, 9.81)` and damping `0.99`.
    pub fn new(bounds: WorldBounds) -> Self {
        Self::from_config(WorldConfig::new(bounds))
    }

    /// Creates an empty world from a validated configuration.
    pub fn with_config(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: WorldConfig) -> Self {
        log::info!("creating physics world: {:?}", config);
        let grid = match config.broad_phase {
            BroadPhase::BruteForce => None,
            BroadPhase::UniformGrid { cell_size } => {
                Some(SpatialGrid::new(config.bounds.as_aabb(), cell_size))
            }
        };
        Self {
            bodies: Vec::new(),
            joints: Vec::new(),
            bounds: config.bounds,
            gravity: config.gravity,
            damping: config.damping,
            joint_iterations: config.joint_iterations,
            substeps: config.substeps,
            grid,
            contacts: Vec::new(),
        }
    }

    // --- Registry ---

    /// Appends a body. Ids are not required to be unique, but lookups by id
    /// only ever see the first match.
    pub fn add_body(&mut self, body: RigidBody) {
        if self.contains_body(&body.id) {
            log::warn!("duplicate body id '{}'; lookups will hit the first one", body.id);
        }
        self.bodies.push(body);
    }

    /// Removes every body with the given id. Joints pointing at it stay
    /// registered but become inert. Returns true if anything was removed.
    pub fn remove_body(&mut self, id: &str) -> bool {
        let before = self.bodies.len();
        self.bodies.retain(|body| body.id != id);
        let removed = self.bodies.len() != before;
        if !removed {
            log::debug!("remove_body: no body with id '{}'", id);
        }
        removed
    }

    /// Appends a joint. Its body ids are resolved on every step.
    pub fn add_joint(&mut self, joint: Joint) {
        self.joints.push(joint);
    }

    /// Removes joints matching `predicate` and returns how many were removed.
    pub fn remove_joints_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Joint) -> bool,
    {
        let before = self.joints.len();
        self.joints.retain(|joint| !predicate(joint));
        let removed = before - self.joints.len();
        if removed == 0 {
            log::debug!("remove_joints_where: nothing matched");
        }
        removed
    }

    /// Removes every joint with an end on `body_id`.
    pub fn remove_joints_attached(&mut self, body_id: &str) -> usize {
        self.remove_joints_where(|joint| joint.connects(body_id))
    }

    /// Adds `force / mass` to the body's velocity. Unknown ids are ignored.
    pub fn apply_force(&mut self, body_id: &str, force: Vec2) {
        match self.body_mut(body_id) {
            Some(body) => body.apply_impulse(force),
            None => log::debug!("apply_force: no body with id '{}'", body_id),
        }
    }

    /// Clears all bodies, joints and contacts. Settings are kept.
    pub fn reset(&mut self) {
        log::info!(
            "resetting world ({} bodies, {} joints)",
            self.bodies.len(),
            self.joints.len()
        );
        self.bodies.clear();
        self.joints.clear();
        self.contacts.clear();
    }

    // --- Accessors ---

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn body(&self, id: &str) -> Option<&RigidBody> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub fn body_mut(&mut self, id: &str) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|body| body.id == id)
    }

    pub fn contains_body(&self, id: &str) -> bool {
        self.body(id).is_some()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Overlaps resolved during the most recent `step`. Indices refer to
    /// `bodies()` and stay valid until the registry is modified.
    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    /// Ids of the body pairs in `contacts()`.
    pub fn contact_ids(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.contacts.iter().filter_map(|contact| {
            let a = self.bodies.get(contact.body_a_idx)?;
            let b = self.bodies.get(contact.body_b_idx)?;
            Some((a.id.as_str(), b.id.as_str()))
        })
    }

    // --- Simulation ---

    /// Advances the simulation by `dt`.
    ///
    /// Each (sub-)step runs, in order: integration, pairwise collision
    /// resolution, joint relaxation and boundary containment.
    pub fn step(&mut self, dt: f64) {
        self.contacts.clear();

        let sub_dt = dt / self.substeps as f64;
        for _ in 0..self.substeps {
            self.update_physics(sub_dt);
            self.check_collisions();
            for _ in 0..self.joint_iterations {
                self.update_joints();
            }
            self.handle_boundaries();
        }

        log::trace!(
            "step dt={}: {} bodies, {} joints, {} contacts",
            dt,
            self.bodies.len(),
            self.joints.len(),
            self.contacts.len()
        );
    }

    fn update_physics(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, self.gravity, self.damping, dt);
        }
    }

    fn check_collisions(&mut self) {
        match self.grid.take() {
            Some(mut grid) => {
                grid.clear();
                for (index, body) in self.bodies.iter().enumerate() {
                    grid.insert(index, &body.aabb());
                }
                for (i, j) in grid.query_potential_pairs() {
                    self.test_pair(i, j);
                }
                self.grid = Some(grid);
            }
            None => {
                for i in 0..self.bodies.len() {
                    for j in (i + 1)..self.bodies.len() {
                        self.test_pair(i, j);
                    }
                }
            }
        }
    }

    fn test_pair(&mut self, i: usize, j: usize) {
        let body_a = &self.bodies[i];
        let body_b = &self.bodies[j];
        if body_a.is_static && body_b.is_static {
            return;
        }

        if let Some(manifold) = collision::check_circle_circle(body_a, i, body_b, j) {
            self.resolve_collision(&manifold);
            self.contacts.push(manifold);
        }
    }

    /// Separates an overlapping pair and exchanges a restitution impulse.
    fn resolve_collision(&mut self, manifold: &CollisionManifold) {
        let Some((body_a, body_b)) = constraints::get_mutable_body_pair(
            &mut self.bodies,
            manifold.body_a_idx,
            manifold.body_b_idx,
        ) else {
            return;
        };

        let inv_mass_a = body_a.inv_mass();
        let inv_mass_b = body_b.inv_mass();
        let total_inv_mass = inv_mass_a + inv_mass_b;
        if total_inv_mass == 0.0 {
            return;
        }
        let normal = manifold.normal;

        // Each side moves by its share of the inverse mass; a static side gets none.
        let correction = normal * (manifold.depth / total_inv_mass);
        body_a.position += correction * inv_mass_a;
        body_b.position -= correction * inv_mass_b;

        let relative_velocity = body_a.velocity - body_b.velocity;
        let velocity_along_normal = relative_velocity.dot(normal);
        if velocity_along_normal > 0.0 {
            // Already separating
            return;
        }

        let restitution = body_a.restitution.min(body_b.restitution);
        let j = -(1.0 + restitution) * velocity_along_normal / total_inv_mass;
        let impulse = normal * j;
        body_a.velocity += impulse * inv_mass_a;
        body_b.velocity -= impulse * inv_mass_b;
    }

    fn update_joints(&mut self) {
        for joint in &self.joints {
            joint.solve_position(&mut self.bodies);
        }
    }

    /// Clamps dynamic bodies inside the bounds, reflecting velocity on contact.
    fn handle_boundaries(&mut self) {
        let WorldBounds { width, height } = self.bounds;
        for body in self.bodies.iter_mut().filter(|body| !body.is_static) {
            let r = body.radius;
            let e = body.restitution;

            if body.position.x - r < 0.0 {
                body.position.x = r;
                body.velocity.x *= -e;
            }
            if body.position.x + r > width {
                body.position.x = width - r;
                body.velocity.x *= -e;
            }
            if body.position.y - r < 0.0 {
                body.position.y = r;
                body.velocity.y *= -e;
            }
            if body.position.y + r > height {
                body.position.y = height - r;
                body.velocity.y *= -e;
            }
        }
    }
}
