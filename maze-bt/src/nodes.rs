use maze_core::{DecisionContext, GameView, MoveSlot};
use maze_tools::{TraceEvent, TraceSink};

use crate::bt::{CompositeKind, LeafNode, Node};

/// A combinator node owning an ordered list of children.
///
/// Child order is semantically significant and fixed after construction
/// except via [`add_children`](Composite::add_children) /
/// [`push_child`](Composite::push_child). An empty composite is a normal
/// degenerate configuration, not a fault: an empty Sequence is vacuously
/// true, an empty Selector vacuously false.
pub struct Composite<G: GameView + 'static> {
    kind: CompositeKind,
    children: Vec<Node<G>>,
    /// Depth of this node in the tree, used to indent trace output.
    depth: u32,
    /// Informational bookkeeping; not consulted during evaluation.
    max_depth: u32,
}

impl<G: GameView + 'static> Composite<G> {
    pub fn new(kind: CompositeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    pub fn sequence() -> Self {
        Self::new(CompositeKind::Sequence)
    }

    pub fn selector() -> Self {
        Self::new(CompositeKind::Selector)
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    /// Append children, returning `self` for fluent top-down assembly.
    ///
    /// Adopted branches get their depths re-derived from this node's depth,
    /// so trace indentation stays consistent however a subtree was built.
    pub fn add_children(mut self, nodes: impl IntoIterator<Item = Node<G>>) -> Self {
        for node in nodes {
            self.adopt(node);
        }
        self
    }

    pub fn push_child(&mut self, node: Node<G>) {
        self.adopt(node);
    }

    fn adopt(&mut self, mut node: Node<G>) {
        if let Node::Branch(c) = &mut node {
            c.set_depth(self.depth + 1);
        }
        self.children.push(node);
    }

    fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
        for child in &mut self.children {
            if let Node::Branch(c) = child {
                c.set_depth(depth + 1);
            }
        }
    }

    pub fn children(&self) -> &[Node<G>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node<G>> {
        &mut self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    /// Actual height of this subtree in nodes (a lone composite is 1, a
    /// composite of leaves is 2, ...). Useful for `set_max_depth`.
    pub fn measured_depth(&self) -> u32 {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                Node::Branch(c) => c.measured_depth(),
                Node::Leaf(_) => 1,
            })
            .max()
            .unwrap_or(0)
    }

    /// Walk this subtree once, depth-first, in stored child order.
    ///
    /// - `Sequence`: stops at the first failing child and returns `false`;
    ///   `true` only if every child succeeded.
    /// - `Selector`: stops at the first succeeding child and returns `true`;
    ///   `false` only if every child failed.
    ///
    /// The boolean is purely the combinator control signal; the chosen move
    /// travels through `out` as a side channel. Trace events are emitted for
    /// this node on entry and for each evaluated leaf child with its result;
    /// tracing never affects the outcome.
    pub fn evaluate(
        &self,
        step: u64,
        game: &G,
        ctx: &DecisionContext,
        out: &mut MoveSlot,
        trace: &mut dyn TraceSink,
    ) -> bool {
        trace.emit(TraceEvent::new(step, self.depth, self.kind.name()));

        match self.kind {
            CompositeKind::Sequence => {
                for child in &self.children {
                    if !self.eval_child(child, step, game, ctx, out, trace) {
                        return false;
                    }
                }
                true
            }
            CompositeKind::Selector => {
                for child in &self.children {
                    if self.eval_child(child, step, game, ctx, out, trace) {
                        return true;
                    }
                }
                false
            }
        }
    }

    fn eval_child(
        &self,
        child: &Node<G>,
        step: u64,
        game: &G,
        ctx: &DecisionContext,
        out: &mut MoveSlot,
        trace: &mut dyn TraceSink,
    ) -> bool {
        match child {
            Node::Branch(c) => c.evaluate(step, game, ctx, out, trace),
            Node::Leaf(l) => {
                let ok = l.evaluate(game, ctx, out);
                trace.emit(TraceEvent::new(step, self.depth + 1, l.name()).with_result(ok));
                ok
            }
        }
    }
}

impl<G: GameView + 'static> Clone for Composite<G> {
    /// Deep copy: same kind and bookkeeping, branch children cloned
    /// recursively, leaf children shared by reference. The clone's child
    /// list is independently mutable.
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            children: self.children.clone(),
            depth: self.depth,
            max_depth: self.max_depth,
        }
    }
}

/// Closure-backed condition leaf for ad-hoc predicates and tests.
pub struct Condition<F> {
    name: &'static str,
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(name: &'static str, cond: F) -> Self {
        Self { name, cond }
    }
}

impl<G, F> LeafNode<G> for Condition<F>
where
    G: GameView + 'static,
    F: Fn(&G, &DecisionContext) -> bool + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, game: &G, ctx: &DecisionContext, _out: &mut MoveSlot) -> bool {
        (self.cond)(game, ctx)
    }
}
