//! The match aggregate: owns the world, the roster and every per-match resource.

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info};

use crate::{
    create_actor, create_ball, step, Actor, Ball, Command, Config, ConfigError, Control, Events,
    Field, GameRng, InputQueue, Roster, Score, Team, Time, Visual,
};

/// Read-only ball state for the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub spin: f32,
    pub size: f32,
}

/// Read-only actor state for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    pub slot: usize,
    pub team: Team,
    pub pos: Vec2,
    pub size: Vec2,
    pub visual_pos: Vec2,
    pub control: Control,
    pub can_kick: bool,
    pub moving_time: f32,
    pub heading: Vec2,
}

/// Snapshot handed to the renderer after each tick
#[derive(Debug, Clone, PartialEq)]
pub struct MatchView {
    pub ball: BallView,
    pub actors: Vec<ActorView>,
    pub score: Score,
    pub events: Events,
    pub debug: bool,
    pub time: f32,
}

pub struct Match {
    pub world: World,
    pub time: Time,
    pub roster: Roster,
    pub field: Field,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    pub ball: Entity,
    pub debug: bool,
    running: bool,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let field = Field::new(&config);

        let ball = create_ball(
            &mut world,
            Ball::new(field.center(), Vec2::ZERO, config.ball_size),
        );

        let mut roster = Roster::new();
        for team in Team::ALL {
            for pos in config.formation(team) {
                let actor = Actor::new(roster.len(), team, pos, &config);
                let entity = create_actor(&mut world, actor);
                roster.push(team, entity);
            }
        }

        // First actor of each team starts under human control
        for team in Team::ALL {
            roster.cycle(&mut world, team);
        }

        info!(
            "match ready: {} actors on a {}x{} field",
            roster.len(),
            field.width,
            field.height
        );

        Self {
            world,
            time: Time::new(0.0, 0.0),
            roster,
            field,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            ball,
            debug: false,
            running: true,
        }
    }

    /// Validate the config before building the match
    pub fn try_new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Advance the simulation by one frame of `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.roster,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
    }

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Activate(slot) => {
                self.roster.activate(&mut self.world, slot);
            }
            Command::Cycle(team) => {
                self.roster.cycle(&mut self.world, team);
            }
            Command::ToggleAi(slot) => {
                self.roster.toggle_ai(&mut self.world, slot);
            }
            Command::ToggleDebug => {
                self.debug = !self.debug;
                debug!("debug overlay {}", if self.debug { "on" } else { "off" });
            }
            Command::Quit => {
                info!("quit requested at {:.2}s", self.time.now);
                self.running = false;
            }
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn actor(&self, slot: usize) -> Option<Actor> {
        let entity = self.roster.entity(slot)?;
        self.world.get::<&Actor>(entity).ok().map(|a| *a)
    }

    /// Build the presentation snapshot for the current state
    pub fn view(&self) -> MatchView {
        let ball = self.ball();

        let actors = self
            .roster
            .entities()
            .filter_map(|entity| {
                let actor = *self.world.get::<&Actor>(entity).ok()?;
                let visual = self
                    .world
                    .get::<&Visual>(entity)
                    .map(|v| v.pos)
                    .unwrap_or(actor.pos);
                Some(ActorView {
                    slot: actor.slot,
                    team: actor.team,
                    pos: actor.pos,
                    size: actor.size(),
                    visual_pos: visual,
                    control: actor.control,
                    can_kick: ball.map(|b| actor.can_kick(&b)).unwrap_or(false),
                    moving_time: actor.moving_time,
                    heading: actor.heading,
                })
            })
            .collect();

        MatchView {
            ball: ball
                .map(|b| BallView {
                    pos: b.pos,
                    vel: b.vel,
                    angle: b.angle,
                    spin: b.spin,
                    size: b.size(),
                })
                .unwrap_or_default(),
            actors,
            score: self.score,
            events: self.events,
            debug: self.debug,
            time: self.time.now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActorIntent;

    const DT: f32 = 1.0 / 60.0;

    fn new_match() -> Match {
        Match::new(Config::new(), 42)
    }

    fn set_ball(m: &mut Match, pos: Vec2, vel: Vec2) {
        let mut ball = m.world.get::<&mut Ball>(m.ball).unwrap();
        ball.pos = pos;
        ball.vel = vel;
    }

    #[test]
    fn test_new_match_layout() {
        let m = new_match();
        let view = m.view();
        assert_eq!(view.actors.len(), 6);
        assert_eq!(view.ball.pos, Vec2::new(650.0, 400.0));
        assert_eq!(view.ball.vel, Vec2::ZERO);

        let humans: Vec<usize> = view
            .actors
            .iter()
            .filter(|a| a.control == Control::Human)
            .map(|a| a.slot)
            .collect();
        assert_eq!(humans, vec![0, 3]);
        assert!(m.is_running());
    }

    #[test]
    fn test_ball_at_rest_stays_put() {
        let mut m = new_match();
        for _ in 0..30 {
            m.tick(DT);
        }
        assert_eq!(m.ball().unwrap().pos, Vec2::new(650.0, 400.0));
    }

    #[test]
    fn test_team_intent_moves_only_human() {
        let mut m = new_match();
        let before_idle = m.actor(1).unwrap().pos;
        m.input_mut().push_team(
            Team::Left,
            ActorIntent {
                right: true,
                ..ActorIntent::new()
            },
        );
        m.tick(DT);

        assert!(m.actor(0).unwrap().pos.x > 60.0, "human moved");
        assert_eq!(m.actor(1).unwrap().pos, before_idle, "idle stayed");
    }

    #[test]
    fn test_goal_resets_ball_and_scores() {
        let mut m = new_match();
        // Above the keeper in slot 1, still inside the goal band
        set_ball(&mut m, Vec2::new(95.0, 360.0), Vec2::new(-600.0, 0.0));
        m.tick(DT);

        assert_eq!(m.score, Score { left: 0, right: 1 });
        assert!(m.events.right_scored);
        let ball = m.ball().unwrap();
        assert!(ball.vel.x > 0.0);
        assert_eq!(m.view().score.right, 1);
    }

    #[test]
    fn test_wall_outside_band_bounces_without_score() {
        let mut m = new_match();
        set_ball(&mut m, Vec2::new(15.0, 100.0), Vec2::new(-600.0, 0.0));
        m.tick(DT);

        assert_eq!(m.score, Score::new());
        assert!(m.ball().unwrap().vel.x > 0.0, "bounced off the side wall");
        assert!(m.events.ball_hit_wall);
    }

    #[test]
    fn test_speed_is_capped() {
        let mut m = new_match();
        set_ball(&mut m, Vec2::new(650.0, 200.0), Vec2::new(5000.0, 0.0));
        m.tick(DT);
        assert!(m.ball().unwrap().vel.length() <= m.config.ball_speed_max + 1e-3);
    }

    #[test]
    fn test_kick_fires_once_per_frame_even_when_substepped() {
        let mut m = new_match();
        let actor = m.actor(0).unwrap();
        set_ball(&mut m, actor.center() + Vec2::new(40.0, 0.0), Vec2::ZERO);
        m.input_mut().push_slot(
            0,
            ActorIntent {
                kick: true,
                ..ActorIntent::new()
            },
        );

        // 0.05s splits into three sub-steps
        m.tick(0.05);
        let vel = m.ball().unwrap().vel;
        assert!(m.events.ball_kicked);
        assert!(vel.x > 0.0 && vel.x <= m.config.kick_force, "single impulse, got {vel:?}");
    }

    #[test]
    fn test_stalled_frame_is_clamped() {
        let mut m = new_match();
        set_ball(&mut m, Vec2::new(650.0, 200.0), Vec2::new(300.0, 0.0));
        m.tick(5.0);
        assert!((m.time.now - m.config.max_dt).abs() < 1e-6);
        assert!(m.ball().unwrap().pos.x < 650.0 + 300.0 * m.config.max_dt + 1e-3);
    }

    #[test]
    fn test_substeps_are_capped_for_unvalidated_config() {
        for fixed_dt in [0.0, 1e-7, f32::NAN] {
            let mut config = Config::new();
            config.fixed_dt = fixed_dt;
            let mut m = Match::new(config, 1);
            set_ball(&mut m, Vec2::new(650.0, 200.0), Vec2::new(300.0, 0.0));

            m.tick(0.1);

            assert!((m.time.now - 0.1).abs() < 1e-6, "fixed_dt {fixed_dt} finished the frame");
            let ball = m.ball().unwrap();
            assert!(ball.pos.is_finite());
            assert!(ball.pos.x > 650.0 && ball.pos.x <= 680.0 + 1e-3);
        }
    }

    #[test]
    fn test_non_positive_dt_does_nothing() {
        let mut m = new_match();
        set_ball(&mut m, Vec2::new(650.0, 200.0), Vec2::new(300.0, 0.0));
        m.tick(0.0);
        m.tick(-1.0);
        m.tick(f32::NAN);
        assert_eq!(m.ball().unwrap().pos, Vec2::new(650.0, 200.0));
        assert_eq!(m.time.now, 0.0);
    }

    #[test]
    fn test_commands() {
        let mut m = new_match();
        m.apply_command(Command::Cycle(Team::Left));
        assert_eq!(m.actor(1).unwrap().control, Control::Human);
        assert_eq!(m.actor(0).unwrap().control, Control::Idle);

        m.apply_command(Command::ToggleAi(3));
        assert_eq!(m.actor(3).unwrap().control, Control::Autonomous);

        m.apply_command(Command::Activate(5));
        assert_eq!(m.actor(5).unwrap().control, Control::Human);
        assert_eq!(m.actor(3).unwrap().control, Control::Autonomous);

        m.apply_command(Command::ToggleDebug);
        assert!(m.view().debug);

        m.apply_command(Command::Quit);
        assert!(!m.is_running());
    }

    #[test]
    fn test_view_reports_kickable_actor() {
        let mut m = new_match();
        let actor = m.actor(4).unwrap();
        set_ball(&mut m, actor.center() + Vec2::new(0.0, 45.0), Vec2::ZERO);
        let view = m.view();
        assert!(view.actors[4].can_kick);
        assert!(!view.actors[0].can_kick);
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let mut config = Config::new();
        config.ball_size = 0.0;
        assert!(Match::try_new(config, 1).is_err());
    }
}
