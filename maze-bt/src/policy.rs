use maze_core::{DecisionContext, GameView, Move, MoveSlot, Perception};
use maze_tools::{NullTraceSink, TraceSink};

use crate::nodes::Composite;

/// Per-step evaluation driver.
///
/// Owns the tree, the perception hook that refreshes the decision context,
/// the output slot, and an injectable trace sink (no-op by default).
/// [`choose_move`](BtPolicy::choose_move) is the once-per-step entry point:
/// one synchronous depth-first walk of the root, then whatever move a leaf
/// wrote — or the configured default, so a full-tree failure can never
/// leave the agent's move undefined.
pub struct BtPolicy<G: GameView + 'static> {
    root: Composite<G>,
    perception: Box<dyn Perception<G>>,
    slot: MoveSlot,
    trace: Box<dyn TraceSink>,
    step: u64,
    last: Option<bool>,
}

impl<G: GameView + 'static> BtPolicy<G> {
    pub fn new(root: Composite<G>, perception: impl Perception<G>) -> Self {
        Self {
            root,
            perception: Box::new(perception),
            slot: MoveSlot::default(),
            trace: Box::new(NullTraceSink),
            step: 0,
            last: None,
        }
    }

    /// Move returned when no action leaf fired (defaults to `Neutral`).
    pub fn with_default_move(mut self, mv: Move) -> Self {
        self.slot = MoveSlot::new(mv);
        self
    }

    pub fn with_trace(mut self, trace: Box<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    /// Refresh the decision context from the snapshot, then decide.
    pub fn choose_move(&mut self, game: &G) -> Move {
        let ctx = self.perception.observe(game);
        self.decide(game, &ctx)
    }

    /// Decide with an already-refreshed context.
    pub fn decide(&mut self, game: &G, ctx: &DecisionContext) -> Move {
        let step = self.step;
        self.step += 1;

        self.slot.clear();
        let result = self
            .root
            .evaluate(step, game, ctx, &mut self.slot, &mut *self.trace);
        self.last = Some(result);
        self.slot.resolve()
    }

    /// Boolean outcome of the most recent evaluation.
    pub fn last_result(&self) -> Option<bool> {
        self.last
    }

    /// Number of evaluations performed so far.
    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn root(&self) -> &Composite<G> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Composite<G> {
        &mut self.root
    }
}
