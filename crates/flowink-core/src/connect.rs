//! Path-draw gesture state machine.

use crate::block::{Block, BlockId};
use crate::geometry::{blocks_overlap, cursor_probe};
use crate::path::CandidatePath;
use kurbo::Point;

/// State of the path-draw controller.
#[derive(Debug, Clone, Default)]
pub enum ConnectState {
    /// No path is being drawn.
    #[default]
    Idle,
    /// A candidate path is being dragged out from a block.
    Drawing(CandidatePath),
}

/// Turns a drag from a block's connector control into a candidate
/// path, tracking the tentative target block under the cursor.
#[derive(Debug, Clone, Default)]
pub struct ConnectController {
    state: ConnectState,
}

impl ConnectController {
    /// Create a new idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin drawing a path out of `source`.
    pub fn begin(&mut self, source: BlockId, cursor: Point) {
        self.state = ConnectState::Drawing(CandidatePath::new(source, cursor));
    }

    /// Track the cursor and re-resolve the tentative target: a 1x1
    /// probe box at the cursor is tested against every block except
    /// the source, topmost first. Returns the tentative target so the
    /// host can highlight it.
    pub fn update(&mut self, cursor: Point, blocks: &[Block], grid: f64) -> Option<BlockId> {
        let ConnectState::Drawing(candidate) = &mut self.state else {
            return None;
        };
        candidate.cursor = cursor;
        let probe = cursor_probe(cursor);
        candidate.target = blocks
            .iter()
            .rev()
            .filter(|block| block.id() != candidate.source)
            .find(|block| blocks_overlap(probe, block.bounds(), grid, false))
            .map(|block| block.id());
        candidate.target
    }

    /// The in-progress candidate, if drawing.
    pub fn candidate(&self) -> Option<&CandidatePath> {
        match &self.state {
            ConnectState::Drawing(candidate) => Some(candidate),
            ConnectState::Idle => None,
        }
    }

    /// Whether a path-draw is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ConnectState::Drawing(_))
    }

    /// Finish the gesture, yielding the candidate for commit.
    pub fn end(&mut self) -> Option<CandidatePath> {
        match std::mem::take(&mut self.state) {
            ConnectState::Drawing(candidate) => Some(candidate),
            ConnectState::Idle => None,
        }
    }

    /// Abort the gesture, discarding the candidate.
    pub fn cancel(&mut self) {
        self.state = ConnectState::Idle;
    }
}
