//! Bed-to-wardrobe clearance, applied after the wardrobe lands.

use glam::DVec2;
use log::{debug, trace};
use roomplan_core::Rect;

use super::{BedPlacement, Plan, PlacementState, TARGET};
use crate::config::ClearancePolicy;
use crate::document::ItemKind;
use crate::issues::Issue;
use crate::occupied::{AccessKind, Entry, Tag};

const SHIFT_STEP: f64 = 50.0;

pub(super) fn apply(plan: &Plan, state: &mut PlacementState) {
    let required = match plan.options.bed_wardrobe_clearance {
        ClearancePolicy::Off => return,
        ClearancePolicy::Advisory(d) | ClearancePolicy::Enforce(d) => d,
    };
    let wardrobe = state.furniture.get(&ItemKind::Wardrobe).map(|item| item.rect);
    let (Some(group), Some(wardrobe)) = (group_bounds(state), wardrobe) else {
        return;
    };
    let gap = group.distance(&wardrobe);
    if gap >= required {
        return;
    }

    if let ClearancePolicy::Enforce(_) = plan.options.bed_wardrobe_clearance {
        if shift_group(plan, state, wardrobe, required) {
            return;
        }
    }
    state.issues.push(Issue::BedWardrobeClearance { gap, required });
}

/// Bounding box of the bed and its bedside tables.
fn group_bounds(state: &PlacementState) -> Option<Rect> {
    state
        .furniture
        .values()
        .filter(|item| item.kind.is_bed_group())
        .map(|item| item.rect)
        .reduce(|a, b| a.union(&b))
}

fn in_group(entry: &Entry) -> bool {
    match entry.tag {
        Tag::Solid(kind) => kind.is_bed_group(),
        Tag::Access(AccessKind::BedSide) => true,
        _ => false,
    }
}

/// Slide the bed group along its wall, away from the wardrobe, in fixed
/// steps until the gap reaches `required`. Every intermediate position must
/// be collision-free, and the side strips must stay on the floor and clear
/// of everything but other access strips.
fn shift_group(plan: &Plan, state: &mut PlacementState, wardrobe: Rect, required: f64) -> bool {
    let Some(bed) = state.bed else {
        return false;
    };
    let Some(group) = group_bounds(state) else {
        return false;
    };
    let axis = plan.room.wall(bed.wall).direction();
    let sign = if wardrobe.center().dot(axis) > group.center().dot(axis) {
        -1.0
    } else {
        1.0
    };

    let members: Vec<(ItemKind, Rect)> = state
        .furniture
        .values()
        .filter(|item| item.kind.is_bed_group() && item.kind.host().is_none())
        .map(|item| (item.kind, item.rect))
        .collect();
    let strip_tag = Tag::Access(AccessKind::BedSide);
    let strips: Vec<Rect> = state.occupied.rects_with(strip_tag).collect();

    let limit = plan.room.wall_length(bed.wall);
    let mut distance = SHIFT_STEP;
    let mut reached = None;
    while distance <= limit {
        let delta = axis * sign * distance;
        let fits = |rect: &Rect, tag: Tag| {
            let moved = rect.translate(delta);
            moved.inside(&plan.floor) && !state.occupied.collides_except(&moved, tag, in_group)
        };
        let clear = members.iter().all(|(kind, rect)| fits(rect, Tag::Solid(*kind)))
            && strips.iter().all(|rect| fits(rect, strip_tag));
        if !clear {
            trace!(target: TARGET, "bed group blocked after {}mm", distance);
            break;
        }
        if group.translate(delta).distance(&wardrobe) >= required {
            reached = Some(delta);
            break;
        }
        distance += SHIFT_STEP;
    }

    let Some(delta) = reached else {
        return false;
    };
    translate_group(state, delta);
    state.bed = Some(BedPlacement {
        wall: bed.wall,
        offset: bed.offset + sign * distance,
    });
    state.issues.push(Issue::BedGroupShifted { wall: bed.wall, distance });
    debug!(target: TARGET, "bed group shifted {}mm along the {} wall", distance, bed.wall);
    true
}

fn translate_group(state: &mut PlacementState, delta: DVec2) {
    for item in state.furniture.values_mut() {
        if item.kind.is_bed_group() {
            item.rect = item.rect.translate(delta);
        }
    }
    state.occupied.translate_where(delta, in_group);
}
