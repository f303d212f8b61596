//! Collision detection
//!
//! Axis-aligned rectangles for the platformer, grid-point checks for Snake.
//! Screen coordinates: +y points down.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict horizontal overlap (touching edges do not count)
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Full bounding-box overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other)
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// True if `body`'s descending edge sits inside `platform`.
///
/// Only the bottom edge is tested: the body must overlap the platform
/// horizontally and its bottom must lie between the platform's top and
/// bottom. Moving direction is the caller's concern.
pub fn lands_on(body: &Rect, platform: &Rect) -> bool {
    body.overlaps_horizontally(platform)
        && body.bottom() >= platform.top()
        && body.bottom() <= platform.bottom()
}

/// True if `point` lies outside `[0, width) x [0, height)`
pub fn out_of_bounds(point: IVec2, width: i32, height: i32) -> bool {
    point.x < 0 || point.x >= width || point.y < 0 || point.y >= height
}

/// True if `point` matches any segment at index `skip` or later
pub fn hits_segments<'a>(
    point: IVec2,
    segments: impl IntoIterator<Item = &'a IVec2>,
    skip: usize,
) -> bool {
    segments.into_iter().skip(skip).any(|s| *s == point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 5.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 25.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges only
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_lands_on_bottom_edge() {
        let platform = Rect::new(100.0, 300.0, 60.0, 12.0);

        // Bottom edge just inside the platform's top
        let body = Rect::new(110.0, 262.0, 40.0, 40.0);
        assert!(lands_on(&body, &platform));

        // Bottom edge above the platform
        let body = Rect::new(110.0, 250.0, 40.0, 40.0);
        assert!(!lands_on(&body, &platform));

        // Bottom edge already below the platform
        let body = Rect::new(110.0, 280.0, 40.0, 40.0);
        assert!(!lands_on(&body, &platform));

        // Horizontally clear of the platform
        let body = Rect::new(160.0, 262.0, 40.0, 40.0);
        assert!(!lands_on(&body, &platform));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!out_of_bounds(IVec2::new(0, 0), 400, 400));
        assert!(!out_of_bounds(IVec2::new(380, 380), 400, 400));
        assert!(out_of_bounds(IVec2::new(-1, 0), 400, 400));
        assert!(out_of_bounds(IVec2::new(400, 0), 400, 400));
        assert!(out_of_bounds(IVec2::new(0, -20), 400, 400));
        assert!(out_of_bounds(IVec2::new(0, 400), 400, 400));
    }

    #[test]
    fn test_hits_segments_skip() {
        let body = [
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(2, 0),
            IVec2::new(3, 0),
            IVec2::new(4, 0),
        ];
        assert!(!hits_segments(IVec2::new(3, 0), &body, 4));
        assert!(hits_segments(IVec2::new(4, 0), &body, 4));
        assert!(hits_segments(IVec2::new(3, 0), &body, 0));
    }
}
