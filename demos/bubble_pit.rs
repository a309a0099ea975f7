//! Headless demo scenes.
//!
//! `cargo run --example bubble_pit -- [pit|cradle|pop]`

use bubble_physics::{BroadPhase, Joint, PhysicsWorld, RigidBody, Vec2, WorldBounds, WorldConfig};
use std::env;

const DT: f64 = 1.0 / 60.0;

fn main() {
    let default = "info,bubble_physics=info";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = env::args().collect();
    let scene = args.get(1).map(String::as_str).unwrap_or("pit");
    log::info!("running scene: {}", scene);

    match scene {
        "pit" => run_bubble_pit(),
        "cradle" => run_cradle(),
        "pop" => run_pop(),
        other => log::warn!("unknown scene '{}'. Available: pit, cradle, pop", other),
    }
}

fn run_bubble_pit() {
    let config = WorldConfig::new(WorldBounds::new(320.0, 240.0))
        .with_broad_phase(BroadPhase::UniformGrid { cell_size: 20.0 });
    let mut world = match PhysicsWorld::with_config(config) {
        Ok(world) => world,
        Err(e) => {
            log::error!("bad config: {}", e);
            return;
        }
    };

    for i in 0..40 {
        let radius = 4.0 + (i % 4) as f64 * 2.0;
        let x = 20.0 + (i % 10) as f64 * 28.0;
        let y = 20.0 + (i / 10) as f64 * 25.0;
        world.add_body(
            RigidBody::new(format!("bubble-{}", i), Vec2::new(x, y), radius, radius * 0.25)
                .with_velocity(Vec2::new((i % 7) as f64 * 10.0 - 30.0, 0.0))
                .with_restitution(0.8),
        );
    }

    for frame in 0..600 {
        world.step(DT);
        if frame % 60 == 0 {
            let lowest = world
                .bodies()
                .iter()
                .map(|body| body.position.y)
                .fold(f64::MIN, f64::max);
            log::info!(
                "frame {}: {} contacts, lowest bubble at y={:.2}",
                frame,
                world.contacts().len(),
                lowest
            );
        }
    }
}

fn run_cradle() {
    let mut world = PhysicsWorld::with_config(
        WorldConfig::new(WorldBounds::new(200.0, 200.0)).with_joint_iterations(4),
    )
    .unwrap_or_else(|_| PhysicsWorld::new(WorldBounds::new(200.0, 200.0)));

    let ball_radius = 8.0;
    for i in 0..5 {
        let x = 68.0 + i as f64 * ball_radius * 2.0;
        let anchor_id = format!("anchor-{}", i);
        let ball_id = format!("ball-{}", i);
        world.add_body(RigidBody::new_static(anchor_id.clone(), Vec2::new(x, 20.0), 1.0));
        world.add_body(
            RigidBody::new(ball_id.clone(), Vec2::new(x, 100.0), ball_radius, 1.0).with_restitution(1.0),
        );
        world.add_joint(Joint::new(anchor_id, ball_id, 80.0));
    }

    // Swing the first ball out to the side
    if let Some(first) = world.body_mut("ball-0") {
        first.position = Vec2::new(20.0, 40.0);
    }

    for frame in 0..600 {
        world.step(DT);
        if frame % 60 == 0 {
            if let Some(last) = world.body("ball-4") {
                log::info!(
                    "frame {}: last ball at ({:.2}, {:.2})",
                    frame,
                    last.position.x,
                    last.position.y
                );
            }
        }
    }
}

fn run_pop() {
    let mut world = PhysicsWorld::new(WorldBounds::new(240.0, 240.0));
    world.add_body(RigidBody::new_static("spike", Vec2::new(120.0, 200.0), 6.0));
    for i in 0..12 {
        let x = 60.0 + (i % 6) as f64 * 24.0;
        let y = 20.0 + (i / 6) as f64 * 30.0;
        world.add_body(RigidBody::new(format!("bubble-{}", i), Vec2::new(x, y), 10.0, 1.0));
    }

    let mut popped = 0;
    for frame in 0..900 {
        // Drift every bubble towards the spike
        let targets: Vec<(String, Vec2)> = world
            .bodies()
            .iter()
            .filter(|body| !body.is_static)
            .map(|body| (body.id.clone(), Vec2::new(120.0, 200.0) - body.position))
            .collect();
        for (id, towards) in targets {
            world.apply_force(&id, towards.normalize() * 0.5);
        }

        world.step(DT);

        let hits: Vec<String> = world
            .contact_ids()
            .filter_map(|(a, b)| match (a, b) {
                ("spike", other) | (other, "spike") => Some(other.to_string()),
                _ => None,
            })
            .collect();
        for id in hits {
            if world.remove_body(&id) {
                popped += 1;
                log::info!("frame {}: popped {}", frame, id);
            }
        }

        if world.bodies().len() == 1 {
            break;
        }
    }

    log::info!("popped {} bubbles", popped);
    world.reset();
}
