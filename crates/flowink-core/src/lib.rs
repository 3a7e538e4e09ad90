//! FlowInk Core Library
//!
//! Platform-agnostic workspace interaction engine for the FlowInk
//! workflow-diagram editor: block and path data model, grid snapping,
//! overlap and intersection geometry, and the drag / path-draw gesture
//! state machines. Rendering and hit-testing against the host's widget
//! tree live in other layers.

pub mod block;
pub mod config;
pub mod connect;
pub mod document;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod input;
pub mod path;
pub mod snap;
pub mod workspace;

pub use block::{Block, BlockId, BlockShape, BlockSize};
pub use config::WorkspaceConfig;
pub use connect::{ConnectController, ConnectState};
pub use document::WorkflowDocument;
pub use drag::{DragController, DragState};
pub use error::PathRejection;
pub use geometry::{block_midpoint, blocks_overlap, edge_anchor, segment_intersect};
pub use input::{HitTarget, PointerEvent};
pub use path::{CandidatePath, Path, PathId};
pub use snap::{DEFAULT_GRID_SIZE, round_to_grid, snap_point};
pub use workspace::{GestureOutcome, Workspace, WorkspaceSnapshot};
