//! Door and window resolution.
//!
//! Openings arrive as loose configuration and leave as positions on a wall,
//! validated against the room and with the door offset clamped so the leaf
//! always fits.

use roomplan_core::{merge, subtract, ConfigError, Interval, Intervals, Rect, WallSide};

use crate::config::{DoorSpec, Hinge, Swing, WindowSpec};
use crate::issues::{Issue, IssueLog};
use crate::room::Room;

/// A door positioned on its wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    pub wall: WallSide,
    pub offset: f64,
    pub width: f64,
    pub hinge: Hinge,
    pub swing: Swing,
}

impl Door {
    pub fn span(&self) -> Interval {
        Interval::new(self.offset, self.offset + self.width)
    }

    /// Along-wall position of the hinge.
    pub fn hinge_offset(&self) -> f64 {
        match self.hinge {
            Hinge::Left => self.offset,
            Hinge::Right => self.offset + self.width,
        }
    }
}

/// A window positioned on its wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub wall: WallSide,
    pub offset: f64,
    pub width: f64,
    pub sill_height: f64,
}

impl Window {
    pub fn span(&self) -> Interval {
        Interval::new(self.offset, self.offset + self.width)
    }
}

/// The room's door and window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Openings {
    pub door: Door,
    pub window: Window,
}

impl Openings {
    /// Position both openings, recording any clamping in `issues`.
    pub fn resolve(
        room: &Room,
        door: &DoorSpec,
        window: &WindowSpec,
        issues: &mut IssueLog,
    ) -> Result<Self, ConfigError> {
        let door = resolve_door(room, door, issues)?;
        let window = resolve_window(room, window, issues)?;

        if door.wall == window.wall && spans_overlap(door.span(), window.span()) {
            return Err(ConfigError::OpeningsOverlap { wall: door.wall });
        }

        Ok(Self { door, window })
    }

    /// Door/window spans on `side`, widened by `buffer` and clipped to the wall.
    pub fn blocked_spans(&self, room: &Room, side: WallSide, buffer: f64) -> Intervals {
        let length = room.wall_length(side);
        let mut spans = Intervals::new();
        if self.door.wall == side {
            spans.push(widen(self.door.span(), buffer).clamp(0.0, length));
        }
        if self.window.wall == side {
            spans.push(widen(self.window.span(), buffer).clamp(0.0, length));
        }
        merge(&spans)
    }

    /// Clear stretches of a wall once buffered opening spans are removed.
    pub fn clear_segments(&self, room: &Room, side: WallSide, buffer: f64) -> Intervals {
        let mut free = Intervals::new();
        free.push(room.wall(side).span());
        for blocked in self.blocked_spans(room, side, buffer) {
            free = subtract(&free, blocked);
        }
        free
    }

    /// Whether `side` carries the door or the window.
    pub fn has_opening(&self, side: WallSide) -> bool {
        self.door.wall == side || self.window.wall == side
    }

    /// Door leaf drawn inside the wall band.
    pub fn door_rect(&self, room: &Room) -> Rect {
        let t = room.external_wall_thickness;
        room.place_off_wall(self.door.wall, self.door.width, t, self.door.offset, -t)
    }

    /// Window glazing drawn inside the wall band.
    pub fn window_rect(&self, room: &Room) -> Rect {
        let t = room.external_wall_thickness;
        room.place_off_wall(self.window.wall, self.window.width, t, self.window.offset, -t)
    }
}

fn widen(span: Interval, buffer: f64) -> Interval {
    Interval::new(span.start - buffer, span.end + buffer)
}

fn spans_overlap(a: Interval, b: Interval) -> bool {
    a.start < b.end && b.start < a.end
}

fn resolve_door(room: &Room, spec: &DoorSpec, issues: &mut IssueLog) -> Result<Door, ConfigError> {
    let length = room.wall_length(spec.wall);
    if !(spec.width > 0.0) {
        return Err(ConfigError::NonPositiveSize {
            field: "door.width",
            value: spec.width,
        });
    }
    if spec.width > length {
        return Err(ConfigError::OpeningTooWide {
            opening: "Door",
            wall: spec.wall,
            width: spec.width,
            length,
        });
    }
    if spec.offset < 0.0 || spec.offset > length {
        return Err(ConfigError::DoorOffsetOutOfRange {
            wall: spec.wall,
            offset: spec.offset,
            length,
        });
    }

    let offset = spec.offset.min(length - spec.width);
    if offset < spec.offset {
        issues.push(Issue::DoorOffsetClamped {
            wall: spec.wall,
            from: spec.offset,
            to: offset,
        });
    }

    Ok(Door {
        wall: spec.wall,
        offset,
        width: spec.width,
        hinge: spec.hinge,
        swing: spec.swing,
    })
}

fn resolve_window(room: &Room, spec: &WindowSpec, issues: &mut IssueLog) -> Result<Window, ConfigError> {
    let length = room.wall_length(spec.wall);
    if !(spec.width > 0.0) {
        return Err(ConfigError::NonPositiveSize {
            field: "window.width",
            value: spec.width,
        });
    }
    if spec.width > length {
        return Err(ConfigError::OpeningTooWide {
            opening: "Window",
            wall: spec.wall,
            width: spec.width,
            length,
        });
    }

    let offset = match spec.offset {
        None => (length - spec.width) / 2.0,
        Some(requested) => {
            let clamped = requested.clamp(0.0, length - spec.width);
            if (clamped - requested).abs() > roomplan_core::EPSILON {
                issues.push(Issue::WindowOffsetClamped {
                    wall: spec.wall,
                    from: requested,
                    to: clamped,
                });
            }
            clamped
        }
    };

    Ok(Window {
        wall: spec.wall,
        offset,
        width: spec.width,
        sill_height: spec.sill_height,
    })
}
