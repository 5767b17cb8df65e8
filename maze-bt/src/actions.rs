use maze_core::{DecisionContext, GameView, MoveSlot};

use crate::bt::LeafNode;

/// Action: head for the nearest ghost (sensible only behind an edibility
/// gate). Fails without acting when no ghost is tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaseGhost;

impl<G: GameView + 'static> LeafNode<G> for ChaseGhost {
    fn name(&self) -> &'static str {
        "ChaseGhost"
    }

    fn evaluate(&self, game: &G, ctx: &DecisionContext, out: &mut MoveSlot) -> bool {
        let Some(ghost) = ctx.nearest_ghost else {
            return false;
        };
        out.set(game.next_move_toward(ctx.current, ghost.tile));
        true
    }
}

/// Action: run away from the nearest ghost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleeGhost;

impl<G: GameView + 'static> LeafNode<G> for FleeGhost {
    fn name(&self) -> &'static str {
        "FleeGhost"
    }

    fn evaluate(&self, game: &G, ctx: &DecisionContext, out: &mut MoveSlot) -> bool {
        let Some(ghost) = ctx.nearest_ghost else {
            return false;
        };
        out.set(game.next_move_away_from(ctx.current, ghost.tile));
        true
    }
}

/// Action: move away from the nearest power pill, saving it for later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvoidPowerPill;

impl<G: GameView + 'static> LeafNode<G> for AvoidPowerPill {
    fn name(&self) -> &'static str {
        "AvoidPowerPill"
    }

    fn evaluate(&self, game: &G, ctx: &DecisionContext, out: &mut MoveSlot) -> bool {
        let Some(pill) = ctx.nearest_power_pill else {
            return false;
        };
        out.set(game.next_move_away_from(ctx.current, pill));
        true
    }
}

/// Action: forage toward the nearest ordinary pill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChasePill;

impl<G: GameView + 'static> LeafNode<G> for ChasePill {
    fn name(&self) -> &'static str {
        "ChasePill"
    }

    fn evaluate(&self, game: &G, ctx: &DecisionContext, out: &mut MoveSlot) -> bool {
        let Some(pill) = ctx.nearest_pill else {
            return false;
        };
        out.set(game.next_move_toward(ctx.current, pill));
        true
    }
}
