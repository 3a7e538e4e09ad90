//! Pure geometry kernel: overlap testing, segment intersection, and
//! path-to-block-edge anchoring.

use crate::block::Block;
use crate::snap::round_to_grid;
use kurbo::{Point, Rect};

/// Test whether two bounding boxes overlap.
///
/// Unless `allow_adjacent` is set, each comparison is padded by half
/// the grid size so that blocks keep at least half a cell of breathing
/// room. With `allow_adjacent`, boxes may touch exactly without
/// counting as an overlap. The comparisons are strict, so two boxes
/// separated by exactly the padding distance do not overlap.
pub fn blocks_overlap(a: Rect, b: Rect, grid: f64, allow_adjacent: bool) -> bool {
    let pad = if allow_adjacent { 0.0 } else { grid / 2.0 };
    a.x0 < b.x1 + pad && b.x0 < a.x1 + pad && a.y0 < b.y1 + pad && b.y0 < a.y1 + pad
}

/// Center of a block's bounding box, each axis rounded to the grid.
pub fn block_midpoint(block: &Block, grid: f64) -> Point {
    let bounds = block.bounds();
    Point::new(
        round_to_grid(bounds.x0 + bounds.width() / 2.0, grid),
        round_to_grid(bounds.y0 + bounds.height() / 2.0, grid),
    )
}

/// Intersection of the segments `(p1, p2)` and `(p3, p4)`, if any.
///
/// Uses the parametric form; parallel and collinear segments yield
/// `None`, as do intersections outside either segment.
pub fn segment_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 {
        return None;
    }
    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(Point::new(
            p1.x + ua * (p2.x - p1.x),
            p1.y + ua * (p2.y - p1.y),
        ))
    } else {
        None
    }
}

/// Point where the segment `(from, toward)` crosses the block's
/// boundary, used to trim a path at the block's visual edge.
///
/// The edges are tried left, right, top, bottom; the first hit wins.
/// If no edge is crossed (degenerate layouts such as overlapping
/// blocks), `from` itself is returned.
pub fn edge_anchor(from: Point, toward: Point, block: &Block) -> Point {
    let b = block.bounds();
    let top_left = Point::new(b.x0, b.y0);
    let top_right = Point::new(b.x1, b.y0);
    let bottom_left = Point::new(b.x0, b.y1);
    let bottom_right = Point::new(b.x1, b.y1);

    segment_intersect(from, toward, top_left, bottom_left)
        .or_else(|| segment_intersect(from, toward, top_right, bottom_right))
        .or_else(|| segment_intersect(from, toward, top_left, top_right))
        .or_else(|| segment_intersect(from, toward, bottom_left, bottom_right))
        .unwrap_or(from)
}

/// One-by-one probe box centered on the cursor, used to hit-test the
/// path-draw gesture against blocks.
pub fn cursor_probe(cursor: Point) -> Rect {
    Rect::new(cursor.x, cursor.y, cursor.x + 1.0, cursor.y + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockShape;
    use approx::assert_relative_eq;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, x + w, y + h)
    }

    #[test]
    fn test_identical_boxes_overlap() {
        let a = rect(160.0, 160.0, 120.0, 80.0);
        for grid in [0.0, 10.0, 20.0] {
            assert!(blocks_overlap(a, a, grid, false));
            assert!(blocks_overlap(a, a, grid, true));
        }
    }

    #[test]
    fn test_disjoint_boxes_do_not_overlap() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        // Separated by more than grid / 2 on the x axis.
        let b = rect(120.0, 0.0, 100.0, 100.0);
        assert!(!blocks_overlap(a, b, 20.0, false));
        assert!(!blocks_overlap(b, a, 20.0, false));
    }

    #[test]
    fn test_touching_boxes_respect_adjacency_flag() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(100.0, 0.0, 100.0, 100.0);
        // Exact contact is an overlap unless adjacency is allowed.
        assert!(blocks_overlap(a, b, 20.0, false));
        assert!(!blocks_overlap(a, b, 20.0, true));
    }

    #[test]
    fn test_half_grid_gap_is_the_boundary() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let gap_exactly_half = rect(110.0, 0.0, 100.0, 100.0);
        let gap_under_half = rect(109.0, 0.0, 100.0, 100.0);
        assert!(!blocks_overlap(a, gap_exactly_half, 20.0, false));
        assert!(blocks_overlap(a, gap_under_half, 20.0, false));
    }

    #[test]
    fn test_segment_intersect_crossing() {
        let hit = segment_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(hit.x, 5.0);
        assert_relative_eq!(hit.y, 5.0);
    }

    #[test]
    fn test_segment_intersect_symmetric_in_segment_order() {
        let (p1, p2) = (Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let (p3, p4) = (Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let a = segment_intersect(p1, p2, p3, p4).unwrap();
        let b = segment_intersect(p3, p4, p1, p2).unwrap();
        assert_relative_eq!(a.x, b.x);
        assert_relative_eq!(a.y, b.y);
    }

    #[test]
    fn test_segment_intersect_parallel_is_none() {
        assert!(
            segment_intersect(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 5.0),
                Point::new(10.0, 5.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_segment_intersect_outside_segment_is_none() {
        // Lines cross, but not within the segments.
        assert!(
            segment_intersect(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 0.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_block_midpoint_grid_rounded() {
        // 120x80 rectangle at (150, 150): raw center (210, 190).
        let block = Block::new("a", Point::new(150.0, 150.0), BlockShape::Rectangle);
        let mid = block_midpoint(&block, 20.0);
        assert_relative_eq!(mid.x, 220.0);
        assert_relative_eq!(mid.y, 200.0);

        let unrounded = block_midpoint(&block, 0.0);
        assert_relative_eq!(unrounded.x, 210.0);
        assert_relative_eq!(unrounded.y, 190.0);
    }

    #[test]
    fn test_edge_anchor_hits_left_edge_first() {
        let block = Block::with_dimensions("b", Point::new(100.0, 100.0), 100.0, 100.0);
        // Horizontal ray from the block center heading left.
        let anchor = edge_anchor(Point::new(150.0, 150.0), Point::new(0.0, 150.0), &block);
        assert_relative_eq!(anchor.x, 100.0);
        assert_relative_eq!(anchor.y, 150.0);
    }

    #[test]
    fn test_edge_anchor_bottom_edge() {
        let block = Block::with_dimensions("b", Point::new(100.0, 100.0), 100.0, 100.0);
        let anchor = edge_anchor(Point::new(150.0, 150.0), Point::new(150.0, 300.0), &block);
        assert_relative_eq!(anchor.x, 150.0);
        assert_relative_eq!(anchor.y, 200.0);
    }

    #[test]
    fn test_edge_anchor_falls_back_to_from_point() {
        let block = Block::with_dimensions("b", Point::new(100.0, 100.0), 100.0, 100.0);
        // Both points inside the block: no edge is crossed.
        let from = Point::new(150.0, 150.0);
        let anchor = edge_anchor(from, Point::new(160.0, 160.0), &block);
        assert_relative_eq!(anchor.x, from.x);
        assert_relative_eq!(anchor.y, from.y);
    }
}
