use hecs::World;
use log::trace;

use crate::{Actor, ActorIntent, Ball, Config, Events};

/// Apply a kick impulse for every human actor holding the kick intent in range.
///
/// There is no cooldown: a held kick fires again on every frame it stays in range.
pub fn apply_kicks(world: &mut World, config: &Config, events: &mut Events) {
    let mut kickers: Vec<Actor> = world
        .query::<(&Actor, &ActorIntent)>()
        .iter()
        .filter(|(_e, (actor, intent))| actor.is_human() && intent.kick)
        .map(|(_e, (actor, _))| *actor)
        .collect();
    kickers.sort_by_key(|actor| actor.slot);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for actor in &kickers {
            if actor.kick(ball, config) {
                events.ball_kicked = true;
                trace!("slot {} kicked, ball vel {:?}", actor.slot, ball.vel);
            }
        }
    }
}
