use maze_core::{DecisionContext, GameView, MoveSlot};

use crate::bt::LeafNode;

/// Condition: the nearest ghost is farther than `far_distance`.
///
/// Strict comparison: a ghost exactly at the threshold counts as near.
/// With no ghost currently tracked the condition fails; missing data is
/// ordinary failure, never a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostsFarAway {
    pub far_distance: u32,
}

impl Default for GhostsFarAway {
    fn default() -> Self {
        Self { far_distance: 40 }
    }
}

impl<G: GameView + 'static> LeafNode<G> for GhostsFarAway {
    fn name(&self) -> &'static str {
        "GhostsFarAway"
    }

    fn evaluate(&self, _game: &G, ctx: &DecisionContext, _out: &mut MoveSlot) -> bool {
        match ctx.nearest_ghost {
            Some(ghost) => ghost.distance > self.far_distance,
            None => false,
        }
    }
}

/// Condition: the nearest ghost is edible for more than `min_edible_ticks`.
///
/// Requires a tracked nearest ghost; the edible time itself comes from the
/// game snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostEdible {
    pub min_edible_ticks: u32,
}

impl Default for GhostEdible {
    fn default() -> Self {
        Self { min_edible_ticks: 1 }
    }
}

impl<G: GameView + 'static> LeafNode<G> for GhostEdible {
    fn name(&self) -> &'static str {
        "GhostEdible"
    }

    fn evaluate(&self, game: &G, ctx: &DecisionContext, _out: &mut MoveSlot) -> bool {
        let Some(ghost) = ctx.nearest_ghost else {
            return false;
        };
        game.ghost_edible_time(ghost.ghost) > self.min_edible_ticks
    }
}

/// Condition: the agent is within `near_distance` of the nearest junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtJunction {
    pub near_distance: u32,
}

impl Default for AtJunction {
    fn default() -> Self {
        Self { near_distance: 2 }
    }
}

impl<G: GameView + 'static> LeafNode<G> for AtJunction {
    fn name(&self) -> &'static str {
        "AtJunction"
    }

    fn evaluate(&self, _game: &G, ctx: &DecisionContext, _out: &mut MoveSlot) -> bool {
        match ctx.nearest_junction() {
            Some(junction) => junction.distance < self.near_distance,
            None => false,
        }
    }
}

/// Condition: a power pill exists within `near_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerPillClose {
    pub near_distance: u32,
}

impl Default for PowerPillClose {
    fn default() -> Self {
        Self { near_distance: 10 }
    }
}

impl<G: GameView + 'static> LeafNode<G> for PowerPillClose {
    fn name(&self) -> &'static str {
        "PowerPillClose"
    }

    fn evaluate(&self, _game: &G, ctx: &DecisionContext, _out: &mut MoveSlot) -> bool {
        match ctx.nearest_power_pill_distance {
            Some(distance) => distance < self.near_distance,
            None => false,
        }
    }
}
