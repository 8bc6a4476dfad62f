use hecs::World;

use crate::{Actor, ActorIntent, Ball, Config, Field, Time, Visual};

/// Move human-controlled actors, then AI-controlled ones
pub fn move_actors(world: &mut World, time: &Time, field: &Field, config: &Config) {
    for (_entity, (actor, intent)) in world.query_mut::<(&mut Actor, &ActorIntent)>() {
        actor.apply_human_intent(intent, time.dt, field);
    }

    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);
    if let Some(ball) = ball {
        for (_entity, actor) in world.query_mut::<&mut Actor>() {
            actor.apply_ai_intent(&ball, time.dt, field, config);
        }
    }
}

/// Integrate ball motion, friction and spin
pub fn move_ball(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.integrate(time.dt, config);
    }
}

/// Ease each actor's on-screen position towards its hitbox
pub fn update_visuals(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (actor, visual)) in world.query_mut::<(&Actor, &mut Visual)>() {
        visual.follow(actor.pos, config.visual_smoothing, time.dt);
    }
}
