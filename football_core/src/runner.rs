//! Frame loop: sample the clock, gather input, tick, present.

use std::time::Instant;

use log::info;

use crate::{Command, InputQueue, Match, MatchView};

/// Monotonic time source, sampled once per frame
pub trait Clock {
    fn now_secs(&mut self) -> f64;
}

/// Wall clock backed by [`Instant`]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock that advances a fixed amount each time it is sampled
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    now: f64,
    step: f64,
}

impl SteppedClock {
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }
}

impl Clock for SteppedClock {
    fn now_secs(&mut self) -> f64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}

/// Input and presentation collaborators driving a match
pub trait Frontend {
    /// Report this frame's intents and control commands
    fn poll(&mut self, view: &MatchView, inputs: &mut InputQueue, commands: &mut Vec<Command>);

    /// Draw the state after a tick; must not touch the simulation
    fn present(&mut self, view: &MatchView);
}

/// Run frames until a [`Command::Quit`] stops the match.
///
/// Returns the number of frames simulated. The stop flag is only checked
/// between frames, so a frame in progress always completes.
pub fn run<C: Clock, F: Frontend>(game: &mut Match, clock: &mut C, frontend: &mut F) -> u64 {
    let mut frames = 0;
    let mut commands = Vec::new();
    let mut last = clock.now_secs();
    let mut view = game.view();

    while game.is_running() {
        let now = clock.now_secs();
        let dt = (now - last) as f32;
        last = now;

        frontend.poll(&view, &mut game.input, &mut commands);
        for command in commands.drain(..) {
            game.apply_command(command);
        }

        game.tick(dt);
        frames += 1;

        view = game.view();
        frontend.present(&view);
    }

    info!(
        "match stopped after {frames} frames, score {} - {}",
        game.score.left, game.score.right
    );
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActorIntent, Config, Team};

    struct ScriptedFrontend {
        quit_after: u64,
        polled: u64,
        presented: Vec<MatchView>,
    }

    impl Frontend for ScriptedFrontend {
        fn poll(
            &mut self,
            _view: &MatchView,
            inputs: &mut InputQueue,
            commands: &mut Vec<Command>,
        ) {
            self.polled += 1;
            inputs.push_team(
                Team::Left,
                ActorIntent {
                    right: true,
                    ..ActorIntent::new()
                },
            );
            if self.polled == self.quit_after {
                commands.push(Command::Quit);
            }
        }

        fn present(&mut self, view: &MatchView) {
            self.presented.push(view.clone());
        }
    }

    #[test]
    fn test_stepped_clock_advances_per_sample() {
        let mut clock = SteppedClock::new(0.5);
        assert_eq!(clock.now_secs(), 0.0);
        assert_eq!(clock.now_secs(), 0.5);
        assert_eq!(clock.now_secs(), 1.0);
    }

    #[test]
    fn test_run_stops_after_quit_and_finishes_the_frame() {
        let mut game = Match::new(Config::new(), 1);
        let mut clock = SteppedClock::new(1.0 / 60.0);
        let mut frontend = ScriptedFrontend {
            quit_after: 10,
            polled: 0,
            presented: Vec::new(),
        };

        let frames = run(&mut game, &mut clock, &mut frontend);

        assert_eq!(frames, 10);
        assert_eq!(frontend.presented.len(), 10, "quit frame still presented");
        assert!(!game.is_running());

        let first = frontend.presented[0].actors[0].pos.x;
        let last = frontend.presented[9].actors[0].pos.x;
        assert!(last > first, "held intent moved the human actor");
        assert!((game.time.now - 10.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let mut clock = MonotonicClock::new();
        let a = clock.now_secs();
        let b = clock.now_secs();
        assert!(b >= a);
    }
}
