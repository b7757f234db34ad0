//! Room and wall model.
//!
//! Coordinates have their origin at the outer corner of the bottom-left
//! external wall, `x` to the right and `y` towards the top wall. The internal
//! floor starts one external wall thickness in from the origin on both axes.
//!
//! Walls are addressed in their own frame: `along` is the distance from the
//! wall start, `into` is the distance from the interior wall face towards the
//! room centre. [`Room::place_off_wall`] is the only place that turns that
//! frame into global rectangles.

use glam::DVec2;
use roomplan_core::{ConfigError, Interval, Orientation, Rect, WallSide};

use crate::config::RoomSpec;

/// Geometry of one interior wall face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallInfo {
    pub side: WallSide,
    /// Wall start on the interior face
    pub start: DVec2,
    pub length: f64,
    pub orientation: Orientation,
}

impl WallInfo {
    /// Unit vector pointing along the wall from its start.
    pub fn direction(&self) -> DVec2 {
        match self.orientation {
            Orientation::Horizontal => DVec2::X,
            Orientation::Vertical => DVec2::Y,
        }
    }

    /// Unit vector pointing from the wall face into the room.
    pub fn inward(&self) -> DVec2 {
        match self.side {
            WallSide::Top => DVec2::NEG_Y,
            WallSide::Bottom => DVec2::Y,
            WallSide::Left => DVec2::X,
            WallSide::Right => DVec2::NEG_X,
        }
    }

    /// The full wall as an interval in its own frame.
    pub fn span(&self) -> Interval {
        Interval::new(0.0, self.length)
    }
}

/// Where along a wall an item should sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlongPosition {
    /// Distance from the wall start to the item's near edge
    Offset(f64),
    /// Centred on the wall
    Centered,
}

/// A validated rectangular room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub internal_width: f64,
    pub internal_depth: f64,
    pub height: f64,
    pub external_wall_thickness: f64,
    pub internal_wall_thickness: f64,
}

impl Room {
    pub fn from_spec(spec: &RoomSpec) -> Result<Self, ConfigError> {
        let checks = [
            ("width", spec.width),
            ("depth", spec.depth),
            ("height", spec.height),
            ("external_wall_thickness", spec.external_wall_thickness),
        ];
        for (field, value) in checks {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDimension { field, value });
            }
        }
        if spec.internal_wall_thickness < 0.0 {
            return Err(ConfigError::NonPositiveDimension {
                field: "internal_wall_thickness",
                value: spec.internal_wall_thickness,
            });
        }

        Ok(Self {
            internal_width: spec.width,
            internal_depth: spec.depth,
            height: spec.height,
            external_wall_thickness: spec.external_wall_thickness,
            internal_wall_thickness: spec.internal_wall_thickness,
        })
    }

    pub fn external_width(&self) -> f64 {
        self.internal_width + 2.0 * self.external_wall_thickness
    }

    pub fn external_depth(&self) -> f64 {
        self.internal_depth + 2.0 * self.external_wall_thickness
    }

    /// Usable floor; every placed item must lie inside it.
    pub fn internal_rect(&self) -> Rect {
        let t = self.external_wall_thickness;
        Rect::new(t, t, self.internal_width, self.internal_depth)
    }

    pub fn external_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.external_width(), self.external_depth())
    }

    pub fn area_m2(&self) -> f64 {
        self.internal_width * self.internal_depth / 1_000_000.0
    }

    pub fn wall_length(&self, side: WallSide) -> f64 {
        match side.orientation() {
            Orientation::Horizontal => self.internal_width,
            Orientation::Vertical => self.internal_depth,
        }
    }

    /// How far the room extends away from a wall's interior face.
    pub fn reach(&self, side: WallSide) -> f64 {
        match side.orientation() {
            Orientation::Horizontal => self.internal_depth,
            Orientation::Vertical => self.internal_width,
        }
    }

    pub fn wall(&self, side: WallSide) -> WallInfo {
        let t = self.external_wall_thickness;
        let start = match side {
            WallSide::Top => DVec2::new(t, t + self.internal_depth),
            WallSide::Bottom | WallSide::Left => DVec2::new(t, t),
            WallSide::Right => DVec2::new(t + self.internal_width, t),
        };
        WallInfo {
            side,
            start,
            length: self.wall_length(side),
            orientation: side.orientation(),
        }
    }

    /// Footprint of an item of size `along × into` placed flush against a wall.
    pub fn place_on_wall(&self, side: WallSide, along: f64, into: f64, at: AlongPosition) -> Rect {
        let offset = match at {
            AlongPosition::Offset(offset) => offset,
            AlongPosition::Centered => (self.wall_length(side) - along) / 2.0,
        };
        self.place_off_wall(side, along, into, offset, 0.0)
    }

    /// Footprint of an `along × into` rectangle whose near edge sits
    /// `standoff` mm from the interior face of `side`.
    ///
    /// A negative standoff reaches into the wall band itself, which is how
    /// opening descriptors are drawn.
    pub fn place_off_wall(&self, side: WallSide, along: f64, into: f64, offset: f64, standoff: f64) -> Rect {
        let t = self.external_wall_thickness;
        let near = standoff;
        let far = standoff + into;
        match side {
            WallSide::Bottom => Rect::new(t + offset, t + near, along, into),
            WallSide::Top => Rect::new(t + offset, t + self.internal_depth - far, along, into),
            WallSide::Left => Rect::new(t + near, t + offset, into, along),
            WallSide::Right => Rect::new(t + self.internal_width - far, t + offset, into, along),
        }
    }

    /// Projection of a global rectangle onto a wall's along axis.
    pub fn span_on_wall(&self, side: WallSide, rect: &Rect) -> Interval {
        let t = self.external_wall_thickness;
        match side.orientation() {
            Orientation::Horizontal => Interval::new(rect.x - t, rect.max_x() - t),
            Orientation::Vertical => Interval::new(rect.y - t, rect.max_y() - t),
        }
    }

    /// Distance range of a global rectangle from a wall's interior face.
    pub fn depth_from_wall(&self, side: WallSide, rect: &Rect) -> Interval {
        let face = self.wall(side).start;
        match side {
            WallSide::Bottom => Interval::new(rect.y - face.y, rect.max_y() - face.y),
            WallSide::Top => Interval::new(face.y - rect.max_y(), face.y - rect.y),
            WallSide::Left => Interval::new(rect.x - face.x, rect.max_x() - face.x),
            WallSide::Right => Interval::new(face.x - rect.max_x(), face.x - rect.x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::from_spec(&RoomSpec {
            width: 3900.0,
            depth: 3600.0,
            height: 3000.0,
            external_wall_thickness: 250.0,
            internal_wall_thickness: 120.0,
        })
        .unwrap()
    }

    fn assert_rect(r: Rect, x: f64, y: f64, w: f64, d: f64) {
        assert!((r.x - x).abs() < 0.001, "x: {} != {}", r.x, x);
        assert!((r.y - y).abs() < 0.001, "y: {} != {}", r.y, y);
        assert!((r.width - w).abs() < 0.001, "width: {} != {}", r.width, w);
        assert!((r.depth - d).abs() < 0.001, "depth: {} != {}", r.depth, d);
    }

    #[test]
    fn test_external_rect_wraps_internal() {
        let room = room();
        let ext = room.external_rect();
        let int = room.internal_rect();
        assert!((ext.width - (int.width + 500.0)).abs() < 0.001);
        assert!((ext.depth - (int.depth + 500.0)).abs() < 0.001);
        assert!(int.inside(&ext));
        assert!((room.area_m2() - 14.04).abs() < 0.001);
    }

    #[test]
    fn test_wall_info() {
        let room = room();
        let top = room.wall(WallSide::Top);
        assert!((top.start.y - 3850.0).abs() < 0.001);
        assert!((top.length - 3900.0).abs() < 0.001);
        assert_eq!(top.inward(), DVec2::NEG_Y);

        let right = room.wall(WallSide::Right);
        assert!((right.start.x - 4150.0).abs() < 0.001);
        assert!((right.length - 3600.0).abs() < 0.001);
        assert_eq!(right.orientation, Orientation::Vertical);
        assert_eq!(right.direction(), DVec2::Y);
        assert!((room.reach(WallSide::Right) - 3900.0).abs() < 0.001);
        assert!((room.reach(WallSide::Bottom) - 3600.0).abs() < 0.001);
    }

    #[test]
    fn test_place_on_bottom_wall() {
        let r = room().place_on_wall(WallSide::Bottom, 1600.0, 2000.0, AlongPosition::Offset(100.0));
        assert_rect(r, 350.0, 250.0, 1600.0, 2000.0);
    }

    #[test]
    fn test_place_on_top_wall() {
        let r = room().place_on_wall(WallSide::Top, 1600.0, 2000.0, AlongPosition::Offset(100.0));
        assert_rect(r, 350.0, 1850.0, 1600.0, 2000.0);
    }

    #[test]
    fn test_place_on_left_wall_swaps_axes() {
        let r = room().place_on_wall(WallSide::Left, 1600.0, 2000.0, AlongPosition::Offset(100.0));
        assert_rect(r, 250.0, 350.0, 2000.0, 1600.0);
    }

    #[test]
    fn test_place_on_right_wall_swaps_axes() {
        let r = room().place_on_wall(WallSide::Right, 1600.0, 2000.0, AlongPosition::Offset(100.0));
        assert_rect(r, 2150.0, 350.0, 2000.0, 1600.0);
    }

    #[test]
    fn test_centered_placement() {
        let room = room();
        let r = room.place_on_wall(WallSide::Bottom, 1800.0, 600.0, AlongPosition::Centered);
        assert_rect(r, 1300.0, 250.0, 1800.0, 600.0);
        let r = room.place_on_wall(WallSide::Right, 1800.0, 600.0, AlongPosition::Centered);
        assert_rect(r, 3550.0, 1150.0, 600.0, 1800.0);
    }

    #[test]
    fn test_standoff_moves_into_room() {
        let room = room();
        // An access strip in front of a 600-deep item on each wall
        assert_rect(room.place_off_wall(WallSide::Bottom, 1000.0, 900.0, 0.0, 600.0), 250.0, 850.0, 1000.0, 900.0);
        assert_rect(room.place_off_wall(WallSide::Top, 1000.0, 900.0, 0.0, 600.0), 250.0, 2350.0, 1000.0, 900.0);
        assert_rect(room.place_off_wall(WallSide::Left, 1000.0, 900.0, 0.0, 600.0), 850.0, 250.0, 900.0, 1000.0);
        assert_rect(room.place_off_wall(WallSide::Right, 1000.0, 900.0, 0.0, 600.0), 2650.0, 250.0, 900.0, 1000.0);
    }

    #[test]
    fn test_negative_standoff_lands_in_wall_band() {
        let room = room();
        let band = room.place_off_wall(WallSide::Top, 900.0, 250.0, 200.0, -250.0);
        assert_rect(band, 450.0, 3850.0, 900.0, 250.0);
        assert!(!band.intersects(&room.internal_rect()));
    }

    #[test]
    fn test_projection_inverts_placement() {
        let room = room();
        for side in WallSide::ALL {
            let r = room.place_off_wall(side, 700.0, 400.0, 300.0, 50.0);
            let span = room.span_on_wall(side, &r);
            let depth = room.depth_from_wall(side, &r);
            assert!((span.start - 300.0).abs() < 0.001, "{side}");
            assert!((span.len() - 700.0).abs() < 0.001, "{side}");
            assert!((depth.start - 50.0).abs() < 0.001, "{side}");
            assert!((depth.end - 450.0).abs() < 0.001, "{side}");
        }
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let spec = RoomSpec {
            depth: 0.0,
            ..RoomSpec::default()
        };
        assert!(matches!(
            Room::from_spec(&spec),
            Err(ConfigError::NonPositiveDimension { field: "depth", .. })
        ));
    }
}
