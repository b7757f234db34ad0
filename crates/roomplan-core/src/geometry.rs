//! Axis-aligned rectangles and interval arithmetic.
//!
//! All values are millimetres in room coordinates: `x` grows to the right,
//! `y` grows towards the top wall. Edges that merely touch never count as
//! overlapping, so items may sit flush against each other and against walls.

use glam::DVec2;
use smallvec::SmallVec;

/// Tolerance used for boundary comparisons on mm-scale values.
pub const EPSILON: f64 = 1e-6;

/// Axis-aligned rectangle in global room coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub depth: f64,
}

impl Rect {
    /// Create a rectangle from its minimum corner and size.
    pub fn new(x: f64, y: f64, width: f64, depth: f64) -> Self {
        Self { x, y, width, depth }
    }

    /// Create a rectangle spanning two corners (in any order).
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Minimum corner.
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Maximum corner.
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.max_x(), self.max_y())
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.depth
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.depth / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// Half-open overlap test on both axes. Touching edges do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x() - EPSILON
            && other.x < self.max_x() - EPSILON
            && self.y < other.max_y() - EPSILON
            && other.y < self.max_y() - EPSILON
    }

    /// Whether all four edges lie within `container` (inclusive).
    pub fn inside(&self, container: &Rect) -> bool {
        self.x >= container.x - EPSILON
            && self.y >= container.y - EPSILON
            && self.max_x() <= container.max_x() + EPSILON
            && self.max_y() <= container.max_y() + EPSILON
    }

    /// Overlapping region, if the rectangles intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.max_x().min(other.max_x());
        let y2 = self.max_y().min(other.max_y());

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Bounding box of both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Same rectangle moved by `delta`.
    pub fn translate(&self, delta: DVec2) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.depth)
    }

    /// Euclidean gap between the closest edges (0 when they touch or overlap).
    pub fn distance(&self, other: &Rect) -> f64 {
        let dx = (other.x - self.max_x()).max(self.x - other.max_x()).max(0.0);
        let dy = (other.y - self.max_y()).max(self.y - other.max_y()).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

/// A closed 1-D span measured along a wall from its start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

/// Interval lists are short (a wall carries at most a door and a window).
pub type Intervals = SmallVec<[Interval; 4]>;

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= EPSILON
    }

    /// Whether a run of `length` fits inside this interval.
    pub fn fits(&self, length: f64) -> bool {
        self.len() + EPSILON >= length
    }

    /// Offset that centres a run of `length` inside this interval.
    pub fn centered(&self, length: f64) -> f64 {
        self.start + (self.len() - length) / 2.0
    }

    /// Same interval clamped to `[lo, hi]`.
    pub fn clamp(&self, lo: f64, hi: f64) -> Interval {
        Interval::new(self.start.clamp(lo, hi), self.end.clamp(lo, hi))
    }
}

/// Remove `blocked` from every interval in `intervals`.
///
/// Pieces that shrink to nothing are dropped.
pub fn subtract(intervals: &[Interval], blocked: Interval) -> Intervals {
    let mut out = Intervals::new();
    for iv in intervals {
        if blocked.end <= iv.start || blocked.start >= iv.end {
            out.push(*iv);
            continue;
        }
        if blocked.start > iv.start {
            out.push(Interval::new(iv.start, blocked.start));
        }
        if blocked.end < iv.end {
            out.push(Interval::new(blocked.end, iv.end));
        }
    }
    out.retain(|iv| !iv.is_empty());
    out
}

/// Sort and coalesce overlapping or touching intervals.
pub fn merge(intervals: &[Interval]) -> Intervals {
    let mut sorted: Intervals = intervals.iter().copied().collect();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged = Intervals::new();
    for iv in sorted {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end => last.end = last.end.max(iv.end),
            _ => merged.push(iv),
        }
    }
    merged
}

/// Order intervals longest first; ties keep the earliest start first.
pub fn largest_first(intervals: &[Interval]) -> Intervals {
    let mut sorted: Intervals = intervals.iter().copied().collect();
    sorted.sort_by(|a, b| {
        b.len()
            .total_cmp(&a.len())
            .then(a.start.total_cmp(&b.start))
    });
    sorted
}
