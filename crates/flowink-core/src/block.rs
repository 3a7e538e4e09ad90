//! Block data model.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a block.
pub type BlockId = Uuid;

/// Built-in block shapes with fixed default dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BlockShape {
    #[default]
    Rectangle,
    Circle,
    Diamond,
}

impl BlockShape {
    /// Default width and height for this shape.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            BlockShape::Rectangle => (120.0, 80.0),
            BlockShape::Circle => (80.0, 80.0),
            BlockShape::Diamond => (120.0, 80.0),
        }
    }
}

/// How a block's bounding box is sized.
///
/// A block either inherits the dimensions of a built-in shape or
/// carries an explicit width and height. The resolver pattern-matches
/// on the variant, so there is no "does this block have a shape?"
/// probing anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BlockSize {
    /// Dimensions come from the shape's defaults.
    Shaped(BlockShape),
    /// Dimensions are set explicitly.
    Explicit { width: f64, height: f64 },
}

impl BlockSize {
    /// Resolve the effective width and height.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            BlockSize::Shaped(shape) => shape.dimensions(),
            BlockSize::Explicit { width, height } => (width, height),
        }
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        BlockSize::Shaped(BlockShape::default())
    }
}

/// A node in the workflow diagram.
///
/// `position` is the top-left corner of the bounding box regardless of
/// shape; circles and diamonds are drawn inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub(crate) id: BlockId,
    /// Display title, centered inside the block.
    pub title: String,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Shape-derived or explicit dimensions.
    pub size: BlockSize,
}

impl Block {
    /// Create a new block with shape-default dimensions.
    pub fn new(title: impl Into<String>, position: Point, shape: BlockShape) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            position,
            size: BlockSize::Shaped(shape),
        }
    }

    /// Create a new block with explicit dimensions.
    pub fn with_dimensions(
        title: impl Into<String>,
        position: Point,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            position,
            size: BlockSize::Explicit { width, height },
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Effective bounding box of the block.
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.size.dimensions();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaped_dimensions() {
        let block = Block::new("Start", Point::new(160.0, 160.0), BlockShape::Circle);
        let bounds = block.bounds();
        assert!((bounds.width() - 80.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_dimensions_override_shape_defaults() {
        let block = Block::with_dimensions("Step", Point::new(0.0, 0.0), 200.0, 40.0);
        let bounds = block.bounds();
        assert!((bounds.width() - 200.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_anchored_at_top_left() {
        let block = Block::new("Step", Point::new(160.0, 160.0), BlockShape::Rectangle);
        let bounds = block.bounds();
        assert!((bounds.x0 - 160.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 160.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 280.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 240.0).abs() < f64::EPSILON);
    }
}
