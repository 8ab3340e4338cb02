//! Distance checks between the player and interactable actors.
use bevy::{ecs::system::SystemParam, prelude::*};

use super::components::{Interactable, Mover, WorldPosition};

/// True iff the Euclidean distance is at most `threshold`.
pub fn in_range(actor: Vec2, npc: Vec2, threshold: f32) -> bool {
    actor.distance(npc) <= threshold
}

/// Logical OR of [`in_range`] across all NPC positions.
pub fn any_in_range<I>(actor: Vec2, npcs: I, threshold: f32) -> bool
where
    I: IntoIterator<Item = Vec2>,
{
    npcs.into_iter()
        .any(|npc| in_range(actor, npc, threshold))
}

/// Reads current actor positions so systems can evaluate proximity on demand.
/// Nothing is cached between calls.
#[derive(SystemParam)]
pub struct ProximityProbe<'w, 's> {
    movers: Query<'w, 's, (Entity, &'static WorldPosition), With<Mover>>,
    npcs: Query<'w, 's, (Entity, &'static WorldPosition), With<Interactable>>,
}

impl ProximityProbe<'_, '_> {
    /// Whether any movable actor is within `threshold` of an interactable one.
    pub fn any_in_range(&self, threshold: f32) -> bool {
        self.movers.iter().any(|(mover, position)| {
            let npcs = self
                .npcs
                .iter()
                .filter(|(npc, _)| *npc != mover)
                .map(|(_, npc_position)| npc_position.0);
            any_in_range(position.0, npcs, threshold)
        })
    }
}
