//! Steps 8 to 10 plus the banquet. All best-effort.

use log::{debug, trace};
use roomplan_core::{largest_first, Intervals, WallSide};

use super::{heights, Plan, PlacementState, TARGET};
use crate::config::Side;
use crate::document::ItemKind;
use crate::issues::Issue;
use crate::ladder::first_success;
use crate::occupied::Tag;
use crate::room::AlongPosition;

/// Screen class and mounting height recommended for a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvSizing {
    pub inches: u32,
    /// mm
    pub viewing_distance: f64,
    /// Height of the screen centre above the floor (mm)
    pub center_z: f64,
}

/// Size the TV from the floor area in m².
pub fn tv_sizing(area_m2: f64) -> TvSizing {
    let inches = if area_m2 < 12.0 {
        32
    } else if area_m2 < 15.0 {
        43
    } else if area_m2 < 20.0 {
        55
    } else {
        65
    };
    let viewing_distance = f64::from(inches) * 25.0;
    let center_z = (1050.0 + 25.0 * ((viewing_distance - 2000.0) / 500.0).max(0.0)).clamp(950.0, 1200.0);
    TvSizing {
        inches,
        viewing_distance,
        center_z,
    }
}

fn centered_in_largest(segments: &Intervals, length: f64) -> Option<f64> {
    largest_first(segments)
        .into_iter()
        .next()
        .filter(|segment| segment.fits(length))
        .map(|segment| segment.centered(length))
}

/// TV on the wall facing the bed; beside the window when that wall carries
/// it; otherwise any remaining wall, door-free walls first.
pub(super) fn place_tv(plan: &Plan, state: &mut PlacementState) {
    let spec = plan.request.tv;
    let Some(bed) = state.bed else {
        return;
    };
    if !spec.enabled {
        return;
    }
    let room = &plan.room;
    let openings = &plan.openings;
    let buffer = plan.options.opening_buffer;
    let facing = bed.wall.opposite();
    let window = openings.window.wall;

    let mut candidates: Vec<(WallSide, f64)> = Vec::new();
    if facing != window {
        candidates.push((facing, (room.wall_length(facing) - spec.width) / 2.0));
        if let Some(offset) = centered_in_largest(&openings.clear_segments(room, facing, buffer), spec.width) {
            candidates.push((facing, offset));
        }
    } else {
        let segments = openings.clear_segments(room, window, plan.options.tv_window_buffer);
        if let Some(offset) = centered_in_largest(&segments, spec.width) {
            candidates.push((window, offset));
        }
    }

    let mut others: Vec<WallSide> = WallSide::ALL
        .into_iter()
        .filter(|&side| side != bed.wall && side != window && side != facing)
        .collect();
    others.sort_by_key(|&side| side == openings.door.wall);
    for side in others {
        if let Some(offset) = centered_in_largest(&openings.clear_segments(room, side, buffer), spec.width) {
            candidates.push((side, offset));
        }
    }

    let found = first_success(candidates, |&(wall, offset)| {
        let rect = room.place_off_wall(wall, spec.width, spec.depth, offset, 0.0);
        let ok = plan.accepts(&state.occupied, &rect, Tag::Solid(ItemKind::TvUnit), spec.height);
        if !ok {
            trace!(target: TARGET, "tv unit rejected on the {} wall at {}mm", wall, offset);
        }
        ok.then_some(rect)
    });

    match found {
        Some(((wall, _), rect)) => {
            let sizing = tv_sizing(room.area_m2());
            let item = plan
                .item(ItemKind::TvUnit, rect, spec.height, Some(wall))
                .with_mount_z(sizing.center_z - spec.height / 2.0);
            state.place(item);
            state.tv_wall = Some(wall);
        }
        None => state.issues.push(Issue::TvUnplaced),
    }
}

/// Flush beside the TV on the chosen side. Silently skipped when blocked.
pub(super) fn place_dressing_table(plan: &Plan, state: &mut PlacementState) {
    let spec = plan.request.dressing_table;
    let (Some(wall), Some(tv)) = (state.tv_wall, state.furniture.get(&ItemKind::TvUnit)) else {
        return;
    };
    if !spec.enabled {
        return;
    }
    let span = plan.room.span_on_wall(wall, &tv.rect);
    let offset = match spec.side {
        Side::Right => span.end,
        Side::Left => span.start - spec.width,
    };
    let rect = plan.room.place_off_wall(wall, spec.width, spec.depth, offset, 0.0);
    if plan.accepts(&state.occupied, &rect, Tag::Solid(ItemKind::DressingTable), heights::DRESSING_TABLE) {
        state.place(plan.item(ItemKind::DressingTable, rect, heights::DRESSING_TABLE, Some(wall)));
    } else {
        debug!(target: TARGET, "dressing table skipped beside the tv on the {} wall", wall);
    }
}

/// Centred on the first wall not used by the bed, window or TV.
pub(super) fn place_dresser(plan: &Plan, state: &mut PlacementState) {
    let spec = plan.request.dresser;
    if !spec.enabled {
        return;
    }
    let used = [state.bed.map(|bed| bed.wall), Some(plan.openings.window.wall), state.tv_wall];
    let found = WallSide::ALL
        .into_iter()
        .filter(|side| !used.contains(&Some(*side)))
        .map(|side| (side, plan.room.place_on_wall(side, spec.width, spec.depth, AlongPosition::Centered)))
        .find(|(_, rect)| plan.accepts(&state.occupied, rect, Tag::Solid(ItemKind::Dresser), heights::DRESSER));

    match found {
        Some((wall, rect)) => state.place(plan.item(ItemKind::Dresser, rect, heights::DRESSER, Some(wall))),
        None => debug!(target: TARGET, "dresser skipped, no free wall"),
    }
}

/// Bench centred on the bed, a fixed gap beyond its foot.
pub(super) fn place_banquet(plan: &Plan, state: &mut PlacementState) {
    let spec = plan.request.banquet;
    let Some(bed) = state.bed else {
        return;
    };
    if !spec.enabled {
        return;
    }
    let (bed_w, bed_len) = plan.request.bed.size.dimensions();
    let rect = plan.room.place_off_wall(
        bed.wall,
        spec.width,
        spec.depth,
        bed.offset + (bed_w - spec.width) / 2.0,
        bed_len + plan.options.banquet_gap,
    );
    if plan.accepts(&state.occupied, &rect, Tag::Solid(ItemKind::Banquet), heights::BANQUET) {
        state.place(plan.item(ItemKind::Banquet, rect, heights::BANQUET, None));
    } else {
        debug!(target: TARGET, "banquet skipped at the foot of the bed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomplan_core::Interval;

    #[test]
    fn test_tv_sizing_by_area() {
        assert_eq!(tv_sizing(11.9).inches, 32);
        assert_eq!(tv_sizing(14.0).inches, 43);
        assert_eq!(tv_sizing(16.0).inches, 55);
        assert_eq!(tv_sizing(25.0).inches, 65);
    }

    #[test]
    fn test_tv_mount_height() {
        let small = tv_sizing(10.0);
        assert!((small.viewing_distance - 800.0).abs() < 0.001);
        assert!((small.center_z - 1050.0).abs() < 0.001);

        let large = tv_sizing(30.0);
        assert!((large.viewing_distance - 1625.0).abs() < 0.001);
        assert!((large.center_z - 1050.0).abs() < 0.001);
    }

    #[test]
    fn test_centered_in_largest_segment() {
        let mut segments = Intervals::new();
        segments.push(Interval::new(0.0, 1000.0));
        segments.push(Interval::new(1800.0, 3600.0));
        let offset = centered_in_largest(&segments, 1200.0).unwrap();
        assert!((offset - 2100.0).abs() < 0.001);
        assert!(centered_in_largest(&segments, 2000.0).is_none());
    }
}
