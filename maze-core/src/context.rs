#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GameView, GhostId, Tile};

/// Summary of the ghost closest to the agent, by path distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NearestGhost {
    pub ghost: GhostId,
    pub tile: Tile,
    pub distance: u32,
}

/// A junction tile and its path distance from the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NearestJunction {
    pub tile: Tile,
    pub distance: u32,
}

/// Derived, per-step view over the raw game state.
///
/// The controller refreshes this once per simulation step, before the tree
/// is evaluated; the tree treats it as an immutable snapshot and never
/// computes any of these summaries itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecisionContext {
    /// The agent's current tile.
    pub current: Tile,
    pub nearest_ghost: Option<NearestGhost>,
    pub nearest_power_pill: Option<Tile>,
    /// Path distance to `nearest_power_pill`, when one exists.
    pub nearest_power_pill_distance: Option<u32>,
    pub nearest_pill: Option<Tile>,
    /// Junctions sorted by ascending path distance.
    pub nearest_junctions: Vec<NearestJunction>,
}

impl DecisionContext {
    pub fn nearest_junction(&self) -> Option<&NearestJunction> {
        self.nearest_junctions.first()
    }
}

/// Refresh hook: turns a raw game snapshot into a [`DecisionContext`].
///
/// Implemented by the controller (or a test stub); called by the evaluation
/// driver exactly once per step.
pub trait Perception<G: GameView>: 'static {
    fn observe(&mut self, game: &G) -> DecisionContext;
}

impl<G, F> Perception<G> for F
where
    G: GameView,
    F: FnMut(&G) -> DecisionContext + 'static,
{
    fn observe(&mut self, game: &G) -> DecisionContext {
        self(game)
    }
}
