use std::cell::Cell;
use std::rc::Rc;

use maze_bt::{Composite, LeafNode, Node};
use maze_core::{DecisionContext, GameView, GhostId, Move, MoveSlot, Tile};
use maze_tools::NullTraceSink;

struct StubGame;

impl GameView for StubGame {
    fn ghost_edible_time(&self, _ghost: GhostId) -> u32 {
        0
    }

    fn next_move_toward(&self, _from: Tile, _to: Tile) -> Move {
        Move::Up
    }

    fn next_move_away_from(&self, _from: Tile, _to: Tile) -> Move {
        Move::Down
    }
}

/// Stateless from the tree's point of view; the shared counter only
/// observes how often the leaf was reached.
struct CountingLeaf {
    result: bool,
    hits: Rc<Cell<u32>>,
}

impl CountingLeaf {
    fn new(result: bool) -> (Self, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        (
            Self {
                result,
                hits: hits.clone(),
            },
            hits,
        )
    }
}

impl LeafNode<StubGame> for CountingLeaf {
    fn name(&self) -> &'static str {
        "CountingLeaf"
    }

    fn evaluate(&self, _game: &StubGame, _ctx: &DecisionContext, _out: &mut MoveSlot) -> bool {
        self.hits.set(self.hits.get() + 1);
        self.result
    }
}

fn evaluate(root: &Composite<StubGame>) -> bool {
    let game = StubGame;
    let ctx = DecisionContext::default();
    let mut slot = MoveSlot::default();
    root.evaluate(0, &game, &ctx, &mut slot, &mut NullTraceSink)
}

#[test]
fn sequence_succeeds_only_if_every_child_succeeds() {
    let (a, hits_a) = CountingLeaf::new(true);
    let (b, hits_b) = CountingLeaf::new(true);
    let root = Composite::sequence().add_children([Node::leaf(a), Node::leaf(b)]);

    assert!(evaluate(&root));
    assert_eq!(hits_a.get(), 1);
    assert_eq!(hits_b.get(), 1);
}

#[test]
fn sequence_stops_at_the_first_failing_child() {
    let (a, hits_a) = CountingLeaf::new(true);
    let (b, hits_b) = CountingLeaf::new(false);
    let (c, hits_c) = CountingLeaf::new(true);
    let root =
        Composite::sequence().add_children([Node::leaf(a), Node::leaf(b), Node::leaf(c)]);

    assert!(!evaluate(&root));
    assert_eq!(hits_a.get(), 1);
    assert_eq!(hits_b.get(), 1);
    assert_eq!(hits_c.get(), 0);
}

#[test]
fn selector_stops_at_the_first_succeeding_child() {
    let (a, hits_a) = CountingLeaf::new(false);
    let (b, hits_b) = CountingLeaf::new(true);
    let (c, hits_c) = CountingLeaf::new(true);
    let root =
        Composite::selector().add_children([Node::leaf(a), Node::leaf(b), Node::leaf(c)]);

    assert!(evaluate(&root));
    assert_eq!(hits_a.get(), 1);
    assert_eq!(hits_b.get(), 1);
    assert_eq!(hits_c.get(), 0);
}

#[test]
fn selector_fails_only_if_every_child_fails() {
    let (a, hits_a) = CountingLeaf::new(false);
    let (b, hits_b) = CountingLeaf::new(false);
    let root = Composite::selector().add_children([Node::leaf(a), Node::leaf(b)]);

    assert!(!evaluate(&root));
    assert_eq!(hits_a.get(), 1);
    assert_eq!(hits_b.get(), 1);
}

#[test]
fn empty_sequence_is_vacuously_true() {
    let root = Composite::<StubGame>::sequence();
    assert!(evaluate(&root));
}

#[test]
fn empty_selector_is_vacuously_false() {
    let root = Composite::<StubGame>::selector();
    assert!(!evaluate(&root));
}

#[test]
fn nested_composites_propagate_results_upward() {
    // Selector [ Sequence [ true, false ], Sequence [ true, true ] ]
    let (a, _) = CountingLeaf::new(true);
    let (b, _) = CountingLeaf::new(false);
    let (c, hits_c) = CountingLeaf::new(true);
    let (d, hits_d) = CountingLeaf::new(true);

    let first = Composite::sequence().add_children([Node::leaf(a), Node::leaf(b)]);
    let second = Composite::sequence().add_children([Node::leaf(c), Node::leaf(d)]);
    let root = Composite::selector().add_children([Node::branch(first), Node::branch(second)]);

    assert!(evaluate(&root));
    assert_eq!(hits_c.get(), 1);
    assert_eq!(hits_d.get(), 1);
}
