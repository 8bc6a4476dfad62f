use crate::{ActorIntent, Team};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Match score, only ever counts up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Goals by the left team
    pub right: u32, // Goals by the right team
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_actor: bool,
    pub ball_hit_wall: bool,
    pub ball_kicked: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Who an intent update is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentTarget {
    /// A single actor by roster slot
    Slot(usize),
    /// Every actor of a team (they share one set of bindings)
    Team(Team),
}

/// Intent updates collected from the input collaborator since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(IntentTarget, ActorIntent)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_slot(&mut self, slot: usize, intent: ActorIntent) {
        self.inputs.push((IntentTarget::Slot(slot), intent));
    }

    pub fn push_team(&mut self, team: Team, intent: ActorIntent) {
        self.inputs.push((IntentTarget::Team(team), intent));
    }

    pub fn pop_inputs(&mut self) -> Vec<(IntentTarget, ActorIntent)> {
        std::mem::take(&mut self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment_right();
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score {
            left: u32::MAX,
            right: 0,
        };
        score.increment_left();
        assert_eq!(score.left, u32::MAX);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: true,
            ball_hit_actor: true,
            ball_hit_wall: true,
            ball_kicked: true,
        };

        events.clear();

        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_input_queue_push_and_pop() {
        let mut queue = InputQueue::new();
        let kick = ActorIntent {
            kick: true,
            ..ActorIntent::new()
        };
        queue.push_slot(2, kick);
        queue.push_team(Team::Right, ActorIntent::new());

        assert_eq!(queue.inputs.len(), 2);
        let popped = queue.pop_inputs();
        assert_eq!(popped[0], (IntentTarget::Slot(2), kick));
        assert_eq!(popped[1], (IntentTarget::Team(Team::Right), ActorIntent::new()));
        assert!(queue.inputs.is_empty());
    }
}
