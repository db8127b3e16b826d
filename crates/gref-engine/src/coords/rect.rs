use super::Vec2;

/// Axis-aligned box in surface units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// Returns the same box moved by `delta`.
    #[inline]
    pub fn translated(self, delta: Vec2) -> Self {
        Self::from_origin_size(self.origin + delta, self.size)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Positive-area overlap test. Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// True when a vertical edge of `self` lies exactly on a vertical edge of `other`
    /// (left meets right or right meets left).
    #[inline]
    pub fn is_adjacent_x(self, other: Rect) -> bool {
        self.origin.x == other.max().x || self.max().x == other.origin.x
    }

    /// True when a horizontal edge of `self` lies exactly on a horizontal edge of `other`.
    #[inline]
    pub fn is_adjacent_y(self, other: Rect) -> bool {
        self.origin.y == other.max().y || self.max().y == other.origin.y
    }

    /// Closed containment of a whole box, edges included.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        b.origin.x >= a.origin.x
            && b.origin.y >= a.origin.y
            && b.max().x <= a.max().x
            && b.max().y <= a.max().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn overlapping_boxes_overlap() {
        assert!(r(0.0, 0.0, 10.0, 10.0).overlaps(r(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edge_is_not_overlap() {
        // Half-open [min, max): a shared edge has zero area.
        assert!(!r(0.0, 0.0, 10.0, 10.0).overlaps(r(10.0, 0.0, 10.0, 10.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).overlaps(r(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        assert!(!r(0.0, 0.0, 5.0, 5.0).overlaps(r(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_contained() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        let inner = r(10.0, 10.0, 20.0, 20.0);
        assert_eq!(outer.intersect(inner), Some(inner));
    }

    // ── adjacency ─────────────────────────────────────────────────────────

    #[test]
    fn adjacent_x_both_sides() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 40.0, 10.0, 10.0);
        assert!(a.is_adjacent_x(b));
        assert!(b.is_adjacent_x(a));
        assert!(!a.is_adjacent_y(b));
    }

    #[test]
    fn adjacent_y_both_sides() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(30.0, 10.0, 10.0, 10.0);
        assert!(a.is_adjacent_y(b));
        assert!(b.is_adjacent_y(a));
        assert!(!a.is_adjacent_x(b));
    }

    #[test]
    fn gap_is_not_adjacent() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        assert!(!a.is_adjacent_x(r(11.0, 0.0, 10.0, 10.0)));
    }

    // ── contains_rect / translated ────────────────────────────────────────

    #[test]
    fn contains_rect_includes_edges() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(outer));
        assert!(outer.contains_rect(r(90.0, 90.0, 10.0, 10.0)));
        assert!(!outer.contains_rect(r(95.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn translated_keeps_size() {
        let t = r(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(10.0, -2.0));
        assert_eq!(t, r(11.0, 0.0, 3.0, 4.0));
    }
}
