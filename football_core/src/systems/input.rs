use hecs::World;

use crate::{ActorIntent, InputQueue, IntentTarget, Roster};

/// Ingest queued intent updates into the actors' intent components
pub fn ingest_inputs(world: &mut World, roster: &Roster, input: &mut InputQueue) {
    for (target, intent) in input.pop_inputs() {
        match target {
            IntentTarget::Slot(slot) => {
                if let Some(entity) = roster.entity(slot) {
                    set_intent(world, entity, intent);
                }
            }
            IntentTarget::Team(team) => {
                for slot in roster.team_slots(team) {
                    if let Some(entity) = roster.entity(slot) {
                        set_intent(world, entity, intent);
                    }
                }
            }
        }
    }
}

fn set_intent(world: &mut World, entity: hecs::Entity, intent: ActorIntent) {
    if let Ok(mut current) = world.get::<&mut ActorIntent>(entity) {
        *current = intent;
    }
}
