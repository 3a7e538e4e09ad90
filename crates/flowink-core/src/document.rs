//! Workflow document: the block and path registries.

use crate::block::{Block, BlockId};
use crate::error::PathRejection;
use crate::geometry::{block_midpoint, edge_anchor};
use crate::path::{CandidatePath, Path, PathId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A workflow document containing all blocks and paths.
///
/// Blocks are kept in z-order: the last entry renders topmost. Paths
/// reference blocks by id and are destroyed together with either
/// endpoint block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowDocument {
    blocks: Vec<Block>,
    paths: Vec<Path>,
}

impl WorkflowDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block on top of the z-order.
    pub fn add_block(&mut self, block: Block) -> BlockId {
        let id = block.id();
        self.blocks.push(block);
        id
    }

    /// Get a block by id.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    /// Get a mutable reference to a block by id.
    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id() == id)
    }

    /// Get a path by id.
    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.iter().find(|p| p.id() == id)
    }

    /// Blocks in z-order (back to front).
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All paths, in insertion order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Move a block to the end of the z-order so it renders above the
    /// others. All other relative orders are preserved; unknown ids
    /// are a no-op.
    pub fn bring_to_front(&mut self, id: BlockId) {
        if let Some(index) = self.blocks.iter().position(|b| b.id() == id) {
            let block = self.blocks.remove(index);
            self.blocks.push(block);
        }
    }

    /// Move a block to the start of the z-order (bottommost).
    pub fn send_to_back(&mut self, id: BlockId) {
        if let Some(index) = self.blocks.iter().position(|b| b.id() == id) {
            let block = self.blocks.remove(index);
            self.blocks.insert(0, block);
        }
    }

    /// Remove a block and every path referencing it.
    pub fn delete_block(&mut self, id: BlockId) -> Option<Block> {
        let index = self.blocks.iter().position(|b| b.id() == id)?;
        let block = self.blocks.remove(index);
        self.paths.retain(|path| !path.references(id));
        Some(block)
    }

    /// Remove a single path.
    pub fn delete_path(&mut self, id: PathId) -> Option<Path> {
        let index = self.paths.iter().position(|p| p.id() == id)?;
        Some(self.paths.remove(index))
    }

    /// Validate a candidate against the path invariants: a target must
    /// be set, must differ from the source, and the ordered
    /// (source, target) pair must not already be connected.
    pub fn check_candidate(&self, candidate: &CandidatePath) -> Result<BlockId, PathRejection> {
        let target = candidate.target.ok_or(PathRejection::NoTarget)?;
        if target == candidate.source {
            return Err(PathRejection::SelfReference);
        }
        let duplicate = self
            .paths
            .iter()
            .any(|p| p.source == candidate.source && p.target == target);
        if duplicate {
            return Err(PathRejection::Duplicate);
        }
        Ok(target)
    }

    /// Whether the candidate would commit successfully.
    pub fn can_add_path(&self, candidate: &CandidatePath) -> bool {
        self.check_candidate(candidate).is_ok()
    }

    /// Commit a candidate as a new path with a fresh id.
    ///
    /// Leaves the document unchanged and reports the reason when the
    /// candidate is invalid.
    pub fn commit_path(&mut self, candidate: &CandidatePath) -> Result<PathId, PathRejection> {
        let target = self.check_candidate(candidate)?;
        let mut path = Path::new("", candidate.source, target);
        path.waypoints = candidate.waypoints.clone();
        let id = path.id();
        self.paths.push(path);
        Ok(id)
    }

    /// Polyline for rendering a path: source midpoint, waypoints,
    /// target midpoint, with both ends trimmed to the blocks' edges.
    ///
    /// Returns `None` if either endpoint block is missing (the
    /// cascade in [`delete_block`](Self::delete_block) keeps that from
    /// happening for committed paths).
    pub fn route_points(&self, path: &Path, grid: f64) -> Option<Vec<Point>> {
        let source = self.block(path.source)?;
        let target = self.block(path.target)?;
        let source_mid = block_midpoint(source, grid);
        let target_mid = block_midpoint(target, grid);

        let after_source = path.waypoints.first().copied().unwrap_or(target_mid);
        let before_target = path.waypoints.last().copied().unwrap_or(source_mid);

        let mut points = Vec::with_capacity(path.waypoints.len() + 2);
        points.push(edge_anchor(source_mid, after_source, source));
        points.extend(path.waypoints.iter().copied());
        points.push(edge_anchor(target_mid, before_target, target));
        Some(points)
    }
}
