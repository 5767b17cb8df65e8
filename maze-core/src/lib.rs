//! Deterministic, engine-agnostic primitives for maze-agent AI.
//!
//! This crate defines the interface boundary between a behavior-tree policy
//! and the game it controls: the opaque game snapshot ([`GameView`]), the
//! derived per-step summary ([`DecisionContext`]), and the explicit output
//! slot for the chosen move ([`MoveSlot`]). The simulation itself (rules,
//! scoring, pathfinding) lives behind these traits.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod context;
pub mod game;
pub mod steering;

pub use context::{DecisionContext, NearestGhost, NearestJunction, Perception};
pub use game::{GameView, GhostId, Move, Tile};
pub use steering::MoveSlot;
