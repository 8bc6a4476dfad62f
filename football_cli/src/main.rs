//! Headless match driver: bots stand in for the keyboard, logs stand in for the screen.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use env_logger::Env;
use football_core::{
    run, ActorIntent, Command, Config, Control, Frontend, InputQueue, Match, MatchView,
    MonotonicClock, SteppedClock, Team,
};
use glam::Vec2;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "football_cli")]
#[command(about = "Run a headless two-team football match", long_about = None)]
struct Cli {
    /// JSON file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to simulate before quitting
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Seed for kick-off jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Hand these slots to the AI at kick-off (repeatable)
    #[arg(long = "ai")]
    ai_slots: Vec<usize>,

    /// Step at wall-clock speed instead of a fixed 60 Hz clock
    #[arg(long)]
    realtime: bool,

    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,
}

/// Plays both human-controlled actors: run behind the ball, kick when close
struct Bots {
    frames: u64,
    quit_after: u64,
    startup: Vec<Command>,
    realtime: bool,
}

impl Bots {
    fn intent_for(
        view: &MatchView,
        team: Team,
        pos: Vec2,
        size: Vec2,
        can_kick: bool,
    ) -> ActorIntent {
        // Left attacks the right goal, so it approaches from the ball's left
        let behind = match team {
            Team::Left => -1.0,
            Team::Right => 1.0,
        };
        let target = view.ball.pos + Vec2::new(behind * view.ball.size, 0.0);
        let delta = target - (pos + size * 0.5);

        ActorIntent {
            up: delta.y < -4.0,
            down: delta.y > 4.0,
            left: delta.x < -4.0,
            right: delta.x > 4.0,
            kick: can_kick,
        }
    }
}

impl Frontend for Bots {
    fn poll(&mut self, view: &MatchView, inputs: &mut InputQueue, commands: &mut Vec<Command>) {
        self.frames += 1;
        commands.append(&mut self.startup);

        for actor in view.actors.iter().filter(|a| a.control == Control::Human) {
            let intent = Self::intent_for(view, actor.team, actor.pos, actor.size, actor.can_kick);
            inputs.push_slot(actor.slot, intent);
        }

        if self.frames >= self.quit_after {
            commands.push(Command::Quit);
        }
    }

    fn present(&mut self, view: &MatchView) {
        if view.events.left_scored || view.events.right_scored {
            info!(
                "goal at {:.1}s, score {} - {}",
                view.time, view.score.left, view.score.right
            );
        }
        if view.debug {
            debug!(
                "t={:.2} ball pos={:?} vel={:?} spin={:.1}",
                view.time, view.ball.pos, view.ball.vel, view.ball.spin
            );
        }
        if self.realtime {
            std::thread::sleep(Duration::from_millis(16));
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading config {}", path.display()))?;
    let config = Config::from_json_str(&json)
        .wrap_err_with(|| format!("loading config {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let mut game = Match::try_new(config, cli.seed)?;

    let mut startup: Vec<Command> = cli
        .ai_slots
        .iter()
        .map(|&slot| Command::ToggleAi(slot))
        .collect();
    if cli.debug {
        startup.push(Command::ToggleDebug);
    }

    let mut bots = Bots {
        frames: 0,
        quit_after: cli.frames.max(1),
        startup,
        realtime: cli.realtime,
    };

    let frames = if cli.realtime {
        run(&mut game, &mut MonotonicClock::new(), &mut bots)
    } else {
        run(&mut game, &mut SteppedClock::new(1.0 / 60.0), &mut bots)
    };

    println!(
        "{} frames, {:.1}s simulated, final score {} - {}",
        frames, game.time.now, game.score.left, game.score.right
    );
    Ok(())
}
