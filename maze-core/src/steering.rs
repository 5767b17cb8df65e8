use crate::Move;

/// Write-only output slot for the move chosen during one tree evaluation.
///
/// This is the explicit side-effect channel between action leaves and the
/// controller: leaves write into it, the driver reads it after the traversal.
/// It is distinct from the boolean success/failure signal that drives
/// combinator control flow. Last write wins if more than one action leaf
/// fires in a single traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSlot {
    pending: Option<Move>,
    default: Move,
}

impl MoveSlot {
    pub fn new(default: Move) -> Self {
        Self {
            pending: None,
            default,
        }
    }

    pub fn set(&mut self, mv: Move) {
        self.pending = Some(mv);
    }

    pub fn pending(&self) -> Option<Move> {
        self.pending
    }

    pub fn default_move(&self) -> Move {
        self.default
    }

    /// Drop any pending move. The driver calls this before each evaluation
    /// so a stale move can never leak into the next step.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// The move the agent should take: the pending move if an action leaf
    /// wrote one this step, otherwise the configured default.
    pub fn resolve(&self) -> Move {
        self.pending.unwrap_or(self.default)
    }
}

impl Default for MoveSlot {
    fn default() -> Self {
        Self::new(Move::Neutral)
    }
}
