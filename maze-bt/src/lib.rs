//! Behavior Tree evaluation engine built on `maze-core`.
//!
//! A tree is assembled once at agent initialization from [`Composite`]
//! combinators (Sequence = ordered AND, Selector = priority-ordered OR) and
//! shared, stateless leaves. Each simulation step the [`BtPolicy`] driver
//! refreshes the decision context, walks the root exactly once, and returns
//! the move an action leaf wrote into the output slot (or a configured
//! default when the whole tree fails).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod bt;
pub mod conditions;
pub mod nodes;
pub mod policy;

pub use actions::{AvoidPowerPill, ChaseGhost, ChasePill, FleeGhost};
pub use bt::{CompositeKind, LeafNode, Node};
pub use conditions::{AtJunction, GhostEdible, GhostsFarAway, PowerPillClose};
pub use nodes::{Composite, Condition};
pub use policy::BtPolicy;
