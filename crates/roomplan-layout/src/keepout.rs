//! Permanent obstacles derived from the openings.

use roomplan_core::Rect;

use crate::config::{Hinge, PlanOptions};
use crate::opening::{Door, Window};
use crate::room::Room;

/// What a keep-out zone protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeepOutKind {
    DoorSwing,
    DoorApproach,
    WindowStrip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeepOutZone {
    pub kind: KeepOutKind,
    pub rect: Rect,
}

/// Swing-leaf box and approach rectangle for the door.
///
/// The leaf box is `width × width`, anchored at the hinge and extending across
/// the door span. It is reserved for outward-swinging doors too.
pub fn door_keep_outs(room: &Room, door: &Door, options: &PlanOptions) -> [KeepOutZone; 2] {
    let leaf = door.width;
    let leaf_start = match door.hinge {
        Hinge::Left => door.hinge_offset(),
        Hinge::Right => door.hinge_offset() - leaf,
    };
    let swing = room.place_off_wall(door.wall, leaf, leaf, leaf_start, 0.0);

    let approach_width = door.width.max(options.door_approach_min_width);
    let approach_start = door.offset + (door.width - approach_width) / 2.0;
    let approach = room.place_off_wall(
        door.wall,
        approach_width,
        options.door_approach_depth,
        approach_start,
        0.0,
    );
    let floor = room.internal_rect();

    [
        KeepOutZone {
            kind: KeepOutKind::DoorSwing,
            rect: swing.intersection(&floor).unwrap_or(swing),
        },
        KeepOutZone {
            kind: KeepOutKind::DoorApproach,
            rect: approach.intersection(&floor).unwrap_or(approach),
        },
    ]
}

/// Keep-clear strip of the given depth, flush to the window's wall face.
pub fn window_strip(room: &Room, window: &Window, depth: f64) -> KeepOutZone {
    KeepOutZone {
        kind: KeepOutKind::WindowStrip,
        rect: room.place_off_wall(window.wall, window.width, depth, window.offset, 0.0),
    }
}
