//! Workspace orchestrator: dispatches pointer events to the drag and
//! path-draw controllers and exposes render-ready snapshots.

use crate::block::{Block, BlockId};
use crate::config::WorkspaceConfig;
use crate::connect::ConnectController;
use crate::document::WorkflowDocument;
use crate::drag::DragController;
use crate::error::PathRejection;
use crate::geometry::blocks_overlap;
use crate::input::{HitTarget, PointerEvent};
use crate::path::{CandidatePath, Path, PathId};
use kurbo::Point;
use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Result of a completed gesture, reported from pointer-up so the host
/// can react (e.g. show the non-fatal "cannot place path here"
/// warning).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A drag committed at a new position.
    BlockMoved(BlockId),
    /// A drag ended overlapping or outside the workspace and was
    /// rolled back to its original position.
    BlockDropRejected(BlockId),
    /// A path-draw committed a new path.
    PathCreated(PathId),
    /// A path-draw ended without a valid target and was discarded.
    PathRejected(PathRejection),
}

/// Immutable view of the workspace for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// Blocks in z-order (last renders topmost).
    pub blocks: Vec<Block>,
    /// All committed paths.
    pub paths: Vec<Path>,
    /// Currently selected block.
    pub selected: Option<BlockId>,
    /// Block currently being dragged.
    pub dragging: Option<BlockId>,
    /// In-progress path-draw candidate.
    pub candidate: Option<CandidatePath>,
    /// Whether the cursor has left the workspace mid-gesture.
    pub cursor_outside: bool,
    /// Whether the dragged block currently overlaps another block.
    pub is_overlapping: bool,
}

/// The interactive workspace: owns the document, the selection, and
/// the two gesture controllers.
///
/// At most one controller is active at a time; starting a gesture
/// cancels any other in-flight gesture, so there is no interleaving to
/// reason about. All transitions happen synchronously inside the
/// `handle_*` methods.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    document: WorkflowDocument,
    config: WorkspaceConfig,
    selected: Option<BlockId>,
    drag: DragController,
    connect: ConnectController,
    cursor_outside: bool,
    is_overlapping: bool,
}

impl Workspace {
    /// Create an empty workspace with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty workspace with the given options.
    pub fn with_config(config: WorkspaceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The workspace options.
    pub fn config(&self) -> WorkspaceConfig {
        self.config
    }

    /// The underlying document.
    pub fn document(&self) -> &WorkflowDocument {
        &self.document
    }

    /// Mutable access to the document, for host-driven edits such as
    /// adding blocks from a palette.
    pub fn document_mut(&mut self) -> &mut WorkflowDocument {
        &mut self.document
    }

    /// The currently selected block.
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Whether any gesture (drag or path-draw) is in progress.
    pub fn gesture_active(&self) -> bool {
        self.drag.is_active() || self.connect.is_active()
    }

    /// Dispatch a pointer event to the appropriate handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<GestureOutcome> {
        match event {
            PointerEvent::Down { position, target } => {
                self.handle_pointer_down(position, target);
                None
            }
            PointerEvent::Move { position } => {
                self.handle_pointer_move(position);
                None
            }
            PointerEvent::Up { position } => self.handle_pointer_up(position),
            PointerEvent::Enter => {
                self.handle_pointer_enter();
                None
            }
            PointerEvent::Leave => {
                self.handle_pointer_leave();
                None
            }
        }
    }

    /// Classify the pointer-down target and start the matching
    /// gesture, or clear the selection on a background click.
    pub fn handle_pointer_down(&mut self, position: Point, target: HitTarget) {
        // A new down while a gesture is live means the host lost an up
        // event; discard the stale gesture before starting over.
        if self.gesture_active() {
            self.cancel();
        }

        match target {
            HitTarget::Block(id) => {
                let Some(block) = self.document.block(id) else {
                    error!("pointer-down on unknown block {id}");
                    return;
                };
                let block_position = block.position;
                self.selected = None;
                self.document.bring_to_front(id);
                self.drag
                    .begin(id, position, block_position, self.config.grid_size);
            }
            HitTarget::Connector(id) => {
                if self.document.block(id).is_none() {
                    error!("pointer-down on connector of unknown block {id}");
                    return;
                }
                self.connect.begin(id, position);
            }
            HitTarget::Background => {
                self.selected = None;
            }
        }
    }

    /// Forward a pointer-move to the active controller.
    ///
    /// During a drag the candidate position always goes live in the
    /// document, overlap or not; validity only gates the commit on
    /// release. A move with no active gesture indicates a listener
    /// lifecycle bug in the host and is logged and ignored.
    pub fn handle_pointer_move(&mut self, position: Point) {
        if self.drag.is_active() {
            let grid = self.config.grid_size;
            let Some((id, candidate)) = self
                .drag
                .block()
                .zip(self.drag.update(position, grid))
            else {
                return;
            };
            if let Some(block) = self.document.block_mut(id) {
                block.position = candidate;
            }
            self.is_overlapping = self.dragged_block_overlaps(id);
        } else if self.connect.is_active() {
            self.connect
                .update(position, self.document.blocks(), self.config.grid_size);
        } else {
            error!("pointer-move with no active gesture; move/up listeners outlived the gesture");
        }
    }

    /// Cursor re-entered the workspace.
    pub fn handle_pointer_enter(&mut self) {
        self.cursor_outside = false;
    }

    /// Cursor left the workspace; a drag released now rolls back.
    pub fn handle_pointer_leave(&mut self) {
        self.cursor_outside = true;
    }

    /// Finalize the active gesture. Transient gesture state is cleared
    /// unconditionally, whatever the outcome.
    pub fn handle_pointer_up(&mut self, position: Point) -> Option<GestureOutcome> {
        if self.drag.is_active() {
            let (id, origin) = self.drag.end()?;
            let invalid = self.cursor_outside || self.is_overlapping;
            if invalid {
                if let Some(block) = self.document.block_mut(id) {
                    block.position = origin;
                }
            }
            // Selection happens regardless of validity.
            self.selected = Some(id);
            self.cursor_outside = false;
            self.is_overlapping = false;
            Some(if invalid {
                GestureOutcome::BlockDropRejected(id)
            } else {
                GestureOutcome::BlockMoved(id)
            })
        } else if self.connect.is_active() {
            let mut candidate = self.connect.end()?;
            candidate.cursor = position;
            // The outside-workspace flag gates path commits just like
            // drag commits.
            let outside = self.cursor_outside;
            self.cursor_outside = false;
            let result = if outside {
                Err(PathRejection::OutsideWorkspace)
            } else {
                self.document.commit_path(&candidate)
            };
            Some(match result {
                Ok(id) => GestureOutcome::PathCreated(id),
                Err(rejection) => {
                    warn!("{rejection}");
                    GestureOutcome::PathRejected(rejection)
                }
            })
        } else {
            None
        }
    }

    /// Discard all in-flight gesture state, rolling back any live drag
    /// position. Called on component teardown mid-gesture; no partial
    /// commit survives.
    pub fn cancel(&mut self) {
        if let Some((id, origin)) = self.drag.end() {
            if let Some(block) = self.document.block_mut(id) {
                block.position = origin;
            }
        }
        self.connect.cancel();
        self.cursor_outside = false;
        self.is_overlapping = false;
    }

    /// Delete a block and every path referencing it. Clears selection
    /// and aborts any gesture involving the block.
    pub fn delete_block(&mut self, id: BlockId) -> Option<Block> {
        if self.drag.block() == Some(id) {
            self.drag.cancel();
            self.is_overlapping = false;
        }
        if let Some(candidate) = self.connect.candidate() {
            if candidate.source == id || candidate.target == Some(id) {
                self.connect.cancel();
            }
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.document.delete_block(id)
    }

    /// Delete a single path.
    pub fn delete_path(&mut self, id: PathId) -> Option<Path> {
        self.document.delete_path(id)
    }

    /// Current render-ready state.
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            blocks: self.document.blocks().to_vec(),
            paths: self.document.paths().to_vec(),
            selected: self.selected,
            dragging: self.drag.block(),
            candidate: self.connect.candidate().cloned(),
            cursor_outside: self.cursor_outside,
            is_overlapping: self.is_overlapping,
        }
    }

    /// Whether the dragged block overlaps any other block at its
    /// current position.
    fn dragged_block_overlaps(&self, dragged: BlockId) -> bool {
        let Some(block) = self.document.block(dragged) else {
            return false;
        };
        let bounds = block.bounds();
        self.document.blocks().iter().any(|other| {
            other.id() != dragged
                && blocks_overlap(
                    bounds,
                    other.bounds(),
                    self.config.grid_size,
                    self.config.allow_adjacent_blocks,
                )
        })
    }
}
