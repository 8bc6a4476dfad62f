//! Control assignment: which actor of each team the humans drive.
//!
//! Every operation keeps at most one [`Control::Human`] actor per team.
//! Slots are global roster indices, left team first.

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::{Actor, Control, Team};

/// External control commands, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hand human control to this slot
    Activate(usize),
    /// Move human control to the next actor of the team
    Cycle(Team),
    /// Switch the AI on or off for this slot
    ToggleAi(usize),
    ToggleDebug,
    Quit,
}

/// Fixed, ordered list of the match's actors
#[derive(Debug, Clone, Default)]
pub struct Roster {
    slots: Vec<(Team, Entity)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor entity; returns its slot
    pub fn push(&mut self, team: Team, entity: Entity) -> usize {
        self.slots.push((team, entity));
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn entity(&self, slot: usize) -> Option<Entity> {
        self.slots.get(slot).map(|&(_, e)| e)
    }

    pub fn team_of(&self, slot: usize) -> Option<Team> {
        self.slots.get(slot).map(|&(t, _)| t)
    }

    /// Entities in roster order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().map(|&(_, e)| e)
    }

    /// Slots belonging to a team, in roster order
    pub fn team_slots(&self, team: Team) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, (t, _))| *t == team)
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn control(&self, world: &World, slot: usize) -> Option<Control> {
        let entity = self.entity(slot)?;
        world.get::<&Actor>(entity).ok().map(|actor| actor.control)
    }

    /// The team's human-controlled slot, if any
    pub fn human_slot(&self, world: &World, team: Team) -> Option<usize> {
        self.team_slots(team)
            .into_iter()
            .find(|&slot| self.control(world, slot) == Some(Control::Human))
    }

    fn set_control(&self, world: &mut World, slot: usize, control: Control) {
        if let Some(entity) = self.entity(slot) {
            if let Ok(mut actor) = world.get::<&mut Actor>(entity) {
                if actor.is_human() && control != Control::Human {
                    actor.heading = Vec2::ZERO;
                    actor.moving_time = 0.0;
                }
                actor.control = control;
            }
        }
    }

    /// Give human control to `slot`, demoting the team's previous human
    pub fn activate(&self, world: &mut World, slot: usize) -> bool {
        let Some(team) = self.team_of(slot) else {
            debug!("activate: slot {slot} out of range");
            return false;
        };

        for other in self.team_slots(team) {
            if other != slot && self.control(world, other) == Some(Control::Human) {
                self.set_control(world, other, Control::Idle);
            }
        }
        self.set_control(world, slot, Control::Human);
        debug!("activate: {team:?} now controls slot {slot}");
        true
    }

    /// Advance human control to the team's next actor, wrapping around
    pub fn cycle(&self, world: &mut World, team: Team) -> Option<usize> {
        let slots = self.team_slots(team);
        if slots.is_empty() {
            return None;
        }

        let current = slots
            .iter()
            .position(|&slot| self.control(world, slot) == Some(Control::Human));
        let next = match current {
            Some(i) => {
                self.set_control(world, slots[i], Control::Idle);
                slots[(i + 1) % slots.len()]
            }
            None => slots[0],
        };
        self.set_control(world, next, Control::Human);
        debug!("cycle: {team:?} now controls slot {next}");
        Some(next)
    }

    /// Flip an actor between AI and manual control.
    ///
    /// Switching the AI off returns the actor to the humans only when its
    /// team has nobody else under human control.
    pub fn toggle_ai(&self, world: &mut World, slot: usize) -> Option<Control> {
        let team = self.team_of(slot)?;
        let control = self.control(world, slot)?;

        let next = match control {
            Control::Autonomous if self.human_slot(world, team).is_none() => Control::Human,
            Control::Autonomous => Control::Idle,
            Control::Human | Control::Idle => Control::Autonomous,
        };
        self.set_control(world, slot, next);
        debug!("toggle_ai: slot {slot} {control:?} -> {next:?}");
        Some(next)
    }
}
