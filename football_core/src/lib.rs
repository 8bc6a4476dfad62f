pub mod components;
pub mod config;
pub mod field;
pub mod game;
pub mod params;
pub mod physics;
pub mod resources;
pub mod roster;
pub mod runner;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use roster::*;
pub use runner::*;

use hecs::World;
use log::debug;
use systems::*;

/// Run one frame of the football simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    roster: &Roster,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    if !(time.dt.is_finite() && time.dt > 0.0) {
        return;
    }

    // Clamp dt to prevent tunnelling after a stall
    let clamped_dt = time.dt.min(config.max_dt);
    if clamped_dt < time.dt {
        debug!("frame dt {:.3}s clamped to {:.3}s", time.dt, clamped_dt);
    }

    // 1. Ingest inputs (apply to actor intents)
    ingest_inputs(world, roster, input);

    // Equal micro-steps no longer than fixed_dt, at most MAX_SUBSTEPS.
    // max() before min() so a NaN ratio falls back to one step.
    let steps = ((clamped_dt / config.fixed_dt) - 1e-4)
        .ceil()
        .max(1.0)
        .min(Params::MAX_SUBSTEPS as f32) as u32;
    let step_dt = clamped_dt / steps as f32;

    for i in 0..steps {
        let step_time = Time {
            dt: step_dt,
            now: time.now + step_dt * (i + 1) as f32,
        };

        // 2. Move actors: humans first, then AI
        move_actors(world, &step_time, field, config);

        // 3. Move ball
        move_ball(world, &step_time, config);

        // 4. Check collisions (walls, then at most one actor)
        check_collisions(world, roster, field, config, events);

        // 5. Kicks fire once per frame
        if i == 0 {
            apply_kicks(world, config, events);
        }

        // 6. Check scoring, then cap ball speed
        check_scoring(world, field, score, events, rng, config);
        clamp_ball_speed(world, config);
    }

    // Presentation only, after all physics for the frame
    update_visuals(
        world,
        &Time {
            dt: clamped_dt,
            now: time.now + clamped_dt,
        },
        config,
    );

    // Update time
    time.now += clamped_dt;
}

/// Helper to create an actor entity
pub fn create_actor(world: &mut World, actor: Actor) -> hecs::Entity {
    world.spawn((actor, ActorIntent::new(), Visual::new(actor.pos)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
