use std::rc::Rc;

use maze_core::{DecisionContext, GameView, MoveSlot};

use crate::nodes::Composite;

/// An atomic condition check or action.
///
/// Leaves are stateless evaluators: `evaluate` takes `&self` and must be
/// safe to call repeatedly. A condition leaf is a pure predicate over the
/// game snapshot and the decision context. An action leaf additionally
/// writes the chosen move into `out` and returns `true` (an action, once
/// chosen, is taken); when the data it needs is missing it returns `false`
/// without touching `out`, which keeps "decided not to act" observable.
pub trait LeafNode<G: GameView>: 'static {
    /// Short node name for tracing.
    fn name(&self) -> &'static str;

    fn evaluate(&self, game: &G, ctx: &DecisionContext, out: &mut MoveSlot) -> bool;
}

/// Combinator semantics of a [`Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    /// Ordered AND: fails on the first failing child.
    Sequence,
    /// Priority-ordered OR: succeeds on the first succeeding child.
    Selector,
}

impl CompositeKind {
    pub fn name(self) -> &'static str {
        match self {
            CompositeKind::Sequence => "Sequence",
            CompositeKind::Selector => "Selector",
        }
    }
}

/// The closed node variant set: a composite branch or a shared leaf.
///
/// Cloning deep-copies branches and shares leaves by reference; leaves hold
/// no per-evaluation state, so one leaf instance may appear in any number
/// of trees.
pub enum Node<G: GameView + 'static> {
    Branch(Composite<G>),
    Leaf(Rc<dyn LeafNode<G>>),
}

impl<G: GameView + 'static> Node<G> {
    pub fn leaf(leaf: impl LeafNode<G>) -> Self {
        Node::Leaf(Rc::new(leaf))
    }

    pub fn shared_leaf(leaf: Rc<dyn LeafNode<G>>) -> Self {
        Node::Leaf(leaf)
    }

    pub fn branch(composite: Composite<G>) -> Self {
        Node::Branch(composite)
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Branch(c) => c.kind().name(),
            Node::Leaf(l) => l.name(),
        }
    }
}

impl<G: GameView + 'static> Clone for Node<G> {
    fn clone(&self) -> Self {
        match self {
            Node::Branch(c) => Node::Branch(c.clone()),
            Node::Leaf(l) => Node::Leaf(Rc::clone(l)),
        }
    }
}
