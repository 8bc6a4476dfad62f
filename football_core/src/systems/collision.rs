use glam::Vec2;
use hecs::World;
use log::trace;

use crate::physics::deflect_off_box;
use crate::{Aabb, Actor, Ball, Config, Events, Field, Roster};

/// Check ball collisions with walls, then with actors
pub fn check_collisions(
    world: &mut World,
    roster: &Roster,
    field: &Field,
    config: &Config,
    events: &mut Events,
) {
    check_boundaries(world, field, events);
    check_actor_collisions(world, roster, field, config, events);
}

/// Reflect the ball off the field edges.
///
/// Top and bottom always bounce. Left and right bounce only outside the goal
/// mouth, so a ball inside the band can run on into the goal.
pub fn check_boundaries(world: &mut World, field: &Field, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = ball.radius();

        if ball.pos.y - r <= 0.0 {
            ball.pos.y = r;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + r >= field.height {
            ball.pos.y = field.height - r;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        if field.in_goal_band(ball.pos.y - r, ball.pos.y + r) {
            continue;
        }

        if ball.pos.x - r <= 0.0 {
            ball.pos.x = r;
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        } else if ball.pos.x + r >= field.width {
            ball.pos.x = field.width - r;
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off the first overlapping actor in roster order.
///
/// At most one actor collision is resolved per step.
pub fn check_actor_collisions(
    world: &mut World,
    roster: &Roster,
    field: &Field,
    config: &Config,
    events: &mut Events,
) {
    // Collect hitboxes first so the ball can be borrowed mutably
    let bodies: Vec<(usize, Aabb)> = roster
        .entities()
        .filter_map(|e| world.get::<&Actor>(e).ok().map(|a| (a.slot, a.bounds())))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = bodies
            .iter()
            .find(|(_, body)| ball.bounds().intersects(body));

        if let Some((slot, body)) = hit {
            resolve_actor_hit(ball, body, field, config);
            events.ball_hit_actor = true;
            trace!("ball hit actor in slot {slot}, vel now {:?}", ball.vel);
        }
    }
}

/// Push the ball clear of `body`, then reflect its velocity
pub fn resolve_actor_hit(ball: &mut Ball, body: &Aabb, field: &Field, config: &Config) {
    let center = body.center();
    let delta = ball.pos - center;
    let dist = delta.length();

    let normal = if dist > config.collision_epsilon {
        delta / dist
    } else {
        fallback_normal(ball.vel, center, field)
    };

    let min_separation = (ball.size() + body.size().max_element()) / 2.0 + config.collision_margin;
    ball.pos = center + normal * min_separation;

    ball.vel = deflect_off_box(
        ball.vel,
        ball.pos,
        body,
        config.max_deflection_deg,
        config.bounce_boost,
    );
}

/// Separation direction when the centres coincide: back the way the ball
/// came, or towards midfield for a ball at rest
fn fallback_normal(vel: Vec2, actor_center: Vec2, field: &Field) -> Vec2 {
    let back = -vel.normalize_or_zero();
    if back != Vec2::ZERO {
        back
    } else if actor_center.x < field.center().x {
        Vec2::X
    } else {
        Vec2::NEG_X
    }
}
