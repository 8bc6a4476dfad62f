use hecs::World;
use log::info;

use crate::physics::clamp_speed;
use crate::{Ball, Config, Events, Field, GameRng, Score};

/// Check whether the ball went into either goal mouth.
///
/// A ball reaching into the left goal scores for the right team and kicks
/// off again towards the right; the mirror rule holds at the other end.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = ball.radius();
        if !field.in_goal_band(ball.pos.y - r, ball.pos.y + r) {
            continue;
        }

        if ball.pos.x - r <= field.goal_depth {
            score.increment_right();
            events.right_scored = true;
            info!("right team scores: {} - {}", score.left, score.right);
            ball.reset_to_center(field, false, config, rng);
        } else if ball.pos.x + r >= field.width - field.goal_depth {
            score.increment_left();
            events.left_scored = true;
            info!("left team scores: {} - {}", score.left, score.right);
            ball.reset_to_center(field, true, config, rng);
        }
    }
}

/// Keep the ball under the maximum speed, preserving direction
pub fn clamp_ball_speed(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = clamp_speed(ball.vel, config.ball_speed_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Field, Score, Events, GameRng) {
        let config = Config::new();
        let field = Field::new(&config);
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (World::new(), config, field, Score::new(), Events::new(), rng)
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_right_team_scores_in_left_goal() {
        let (mut world, config, field, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(85.0, 400.0), Vec2::new(-300.0, 0.0), config.ball_size),
        );

        check_scoring(&mut world, &field, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score { left: 0, right: 1 });
        assert!(events.right_scored);
        let b = ball(&world);
        assert_eq!(b.pos, field.center());
        assert!(b.vel.x > 0.0, "kick-off heads away from the left goal");
        assert_eq!((b.spin, b.angle), (0.0, 0.0));
    }

    #[test]
    fn test_left_team_scores_in_right_goal() {
        let (mut world, config, field, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(1215.0, 440.0), Vec2::new(300.0, 0.0), config.ball_size),
        );

        check_scoring(&mut world, &field, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score { left: 1, right: 0 });
        assert!(events.left_scored);
        assert!(ball(&world).vel.x < 0.0);
    }

    #[test]
    fn test_goal_band_edge_still_counts() {
        let (mut world, config, field, mut score, mut events, mut rng) = setup_world();
        // Ball's bottom edge just touches the top of the band (352)
        create_ball(
            &mut world,
            Ball::new(Vec2::new(50.0, 342.0), Vec2::ZERO, config.ball_size),
        );

        check_scoring(&mut world, &field, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_no_goal_outside_band() {
        let (mut world, config, field, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(40.0, 200.0), Vec2::new(-300.0, 0.0), config.ball_size),
        );

        check_scoring(&mut world, &field, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new());
        assert!(!events.left_scored && !events.right_scored);
        assert_eq!(ball(&world).pos, Vec2::new(40.0, 200.0));
    }

    #[test]
    fn test_no_goal_in_midfield() {
        let (mut world, config, field, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(field.center(), Vec2::new(300.0, 0.0), config.ball_size),
        );

        check_scoring(&mut world, &field, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_clamp_ball_speed() {
        let (mut world, config, ..) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::ZERO, Vec2::new(-1200.0, 1600.0), config.ball_size),
        );

        clamp_ball_speed(&mut world, &config);

        let vel = ball(&world).vel;
        assert!((vel.length() - config.ball_speed_max).abs() < 1e-2);
        assert!((vel.x / vel.y - (-0.75)).abs() < 1e-4, "direction preserved");
    }
}
