#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete move command for the controlled agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
    /// Keep the current heading. Also the conventional fallback when no
    /// action leaf wrote a move.
    #[default]
    Neutral,
}

/// Index of a node in the maze graph.
///
/// Opaque to the tree: only the game snapshot can interpret it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile(pub u32);

/// Stable identifier for a ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GhostId(pub u8);

/// Read-only game snapshot, valid for one simulation step.
///
/// The core crate intentionally does not prescribe a world representation;
/// the controller supplies an implementation backed by whatever simulation
/// it runs. All queries are expected to be cheap (pre-computed or O(small)).
pub trait GameView {
    /// Remaining ticks for which `ghost` is edible, 0 when it is not.
    fn ghost_edible_time(&self, ghost: GhostId) -> u32;

    /// First step of the shortest path from `from` toward `to`.
    fn next_move_toward(&self, from: Tile, to: Tile) -> Move;

    /// First step of the path-distance-maximizing move from `from` away
    /// from `to`.
    fn next_move_away_from(&self, from: Tile, to: Tile) -> Move;
}
