//! Path (directed edge) data model.

use crate::block::BlockId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a path.
pub type PathId = Uuid;

/// A directed edge between two blocks, optionally routed through
/// intermediate waypoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    pub(crate) id: PathId,
    /// Display title.
    pub title: String,
    /// Block the path leaves from.
    pub source: BlockId,
    /// Block the path arrives at.
    pub target: BlockId,
    /// Intermediate routing points between the two blocks.
    pub waypoints: Vec<Point>,
}

impl Path {
    /// Create a new path between two blocks.
    pub fn new(title: impl Into<String>, source: BlockId, target: BlockId) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            source,
            target,
            waypoints: Vec::new(),
        }
    }

    pub fn id(&self) -> PathId {
        self.id
    }

    /// Whether this path touches the given block at either end.
    pub fn references(&self, block: BlockId) -> bool {
        self.source == block || self.target == block
    }
}

/// An in-progress path being drawn from a block's connector control.
///
/// At most one candidate exists at a time; it either resolves into a
/// committed [`Path`] on release or is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePath {
    /// Block the gesture started from.
    pub source: BlockId,
    /// Tentative target under the cursor, if any.
    pub target: Option<BlockId>,
    /// Current workspace-relative cursor position.
    pub cursor: Point,
    /// Waypoints accumulated during the gesture.
    pub waypoints: Vec<Point>,
}

impl CandidatePath {
    /// Start a candidate at the connector of `source`.
    pub fn new(source: BlockId, cursor: Point) -> Self {
        Self {
            source,
            target: None,
            cursor,
            waypoints: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_either_endpoint() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let path = Path::new("approve", a, b);
        assert!(path.references(a));
        assert!(path.references(b));
        assert!(!path.references(c));
    }

    #[test]
    fn test_candidate_starts_without_target() {
        let source = Uuid::new_v4();
        let candidate = CandidatePath::new(source, Point::new(10.0, 10.0));
        assert_eq!(candidate.source, source);
        assert!(candidate.target.is_none());
        assert!(candidate.waypoints.is_empty());
    }
}
