//! Pointer event vocabulary.
//!
//! The host resolves raw hit-testing against its widget tree and hands
//! the engine workspace-relative coordinates plus a [`HitTarget`]
//! classification; nothing here touches the DOM or the window system.

use crate::block::BlockId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What a pointer-down landed on, as resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    /// The draggable body of a block.
    Block(BlockId),
    /// The connector control of a (selected) block, starting a
    /// path-draw gesture.
    Connector(BlockId),
    /// Empty workspace background.
    Background,
}

/// A pointer event delivered by the host input system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        target: HitTarget,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// Cursor re-entered the workspace bounds.
    Enter,
    /// Cursor left the workspace bounds.
    Leave,
}
