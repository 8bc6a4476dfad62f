//! Pure numeric helpers shared by the ball integrator and the collision systems.

use glam::Vec2;

use crate::Aabb;

/// Multiplicative velocity decay for a step of `dt` seconds.
///
/// `base_decay` is the fraction of velocity kept over one reference frame
/// (`1 / reference_rate` seconds), so the perceived deceleration is the same
/// at any frame rate.
pub fn friction_factor(dt: f32, base_decay: f32, reference_rate: f32) -> f32 {
    base_decay.powf(dt * reference_rate)
}

/// Rescale `vel` to `max_speed` if it is faster, keeping its direction
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Velocity of a ball leaving an actor's box.
///
/// The horizontal component is flipped, then the outgoing direction is
/// rebuilt from where the ball sits along the box height: the centre sends
/// it straight back, the edges deflect it by up to `max_deflection_deg`.
/// Speed is kept and multiplied by `boost`.
pub fn deflect_off_box(
    vel: Vec2,
    ball_center: Vec2,
    actor: &Aabb,
    max_deflection_deg: f32,
    boost: f32,
) -> Vec2 {
    let height = actor.size().y;
    let hit = if height > 0.0 {
        (((ball_center.y - actor.min.y) / height - 0.5) * 2.0).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let flipped_x = -vel.x;
    let speed = vel.length();
    let angle = (hit * max_deflection_deg).to_radians();
    let dir = if flipped_x > 0.0 { 1.0 } else { -1.0 };

    Vec2::new(angle.cos() * speed * dir, angle.sin() * speed) * boost
}
