//! Drag gesture state machine for moving blocks.

use crate::block::BlockId;
use crate::snap::{round_to_grid, snap_point};
use kurbo::Point;

/// State of the drag controller.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A block is being dragged.
    Dragging {
        /// The block being moved.
        block: BlockId,
        /// Pointer position at drag start.
        origin_pointer: Point,
        /// Grid-rounded block position at drag start, restored on
        /// rollback.
        origin_position: Point,
    },
}

/// Converts pointer-move deltas into grid-snapped candidate positions
/// for the dragged block.
///
/// The controller never decides whether a placement is valid: the
/// candidate position always goes live so the drag stays visually
/// attached to the cursor, and the orchestrator rolls back on release
/// if the overlap or outside-workspace flags are set.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create a new idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `block`, capturing the pointer position and the
    /// block's grid-rounded current position.
    pub fn begin(&mut self, block: BlockId, pointer: Point, block_position: Point, grid: f64) {
        self.state = DragState::Dragging {
            block,
            origin_pointer: pointer,
            origin_position: snap_point(block_position, grid),
        };
    }

    /// Candidate position for the current pointer location: the drag
    /// delta is grid-rounded and applied to the origin position, so
    /// the block jumps cell by cell.
    pub fn update(&self, pointer: Point, grid: f64) -> Option<Point> {
        let DragState::Dragging {
            origin_pointer,
            origin_position,
            ..
        } = self.state
        else {
            return None;
        };
        let delta_x = origin_pointer.x - pointer.x;
        let delta_y = origin_pointer.y - pointer.y;
        Some(Point::new(
            origin_position.x - round_to_grid(delta_x, grid),
            origin_position.y - round_to_grid(delta_y, grid),
        ))
    }

    /// The block currently being dragged.
    pub fn block(&self) -> Option<BlockId> {
        match self.state {
            DragState::Dragging { block, .. } => Some(block),
            DragState::Idle => None,
        }
    }

    /// The position to restore on rollback.
    pub fn origin_position(&self) -> Option<Point> {
        match self.state {
            DragState::Dragging {
                origin_position, ..
            } => Some(origin_position),
            DragState::Idle => None,
        }
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Finish the drag, returning the block and its origin position.
    pub fn end(&mut self) -> Option<(BlockId, Point)> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging {
                block,
                origin_position,
                ..
            } => Some((block, origin_position)),
            DragState::Idle => None,
        }
    }

    /// Abort the drag without reporting an outcome.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
