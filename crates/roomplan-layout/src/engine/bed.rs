//! Steps 2 to 7: the bed group and the wardrobe that must fit around it.
//!
//! The bed goes to the first candidate `(wall, offset)` that is inside the
//! room and collision-free, followed by its headboard, side strips, bedside
//! tables and the wardrobe. With [`PlanOptions::bed_group_backtracking`] on,
//! a table or wardrobe failure moves the bed to its next candidate instead:
//! every candidate is played out on a clone of the state and the first
//! complete group is committed.
//!
//! [`PlanOptions::bed_group_backtracking`]: crate::config::PlanOptions::bed_group_backtracking

use log::{debug, trace};
use roomplan_core::{PlacementError, WallSide, EPSILON};
use smallvec::SmallVec;

use super::{heights, wardrobe, BedPlacement, Plan, PlacementState, TARGET};
use crate::document::ItemKind;
use crate::issues::Issue;
use crate::ladder::{bed_offsets, bedside_sizes, first_success};
use crate::occupied::{AccessKind, Tag};

pub(super) fn place_bed_group(plan: &Plan, state: &mut PlacementState) -> Result<(), PlacementError> {
    let walls = bed_walls(plan, state)?;
    let (bed_w, _) = plan.request.bed.size.dimensions();
    let backtrack = plan.options.bed_group_backtracking;

    let candidates: Vec<(WallSide, f64)> = walls
        .iter()
        .flat_map(|&wall| {
            bed_offsets(plan.room.wall_length(wall), bed_w)
                .into_iter()
                .map(move |offset| (wall, offset))
        })
        .collect();

    let mut first_error: Option<PlacementError> = None;
    for (index, &(wall, offset)) in candidates.iter().enumerate() {
        let mut trial = state.clone();
        if !place_bed(plan, &mut trial, wall, offset) {
            continue;
        }
        match place_around_bed(plan, &mut trial, wall, offset) {
            Ok(()) => {
                *state = trial;
                if index > 0 {
                    state.issues.push(Issue::BedRepositioned { wall, offset });
                }
                debug!(target: TARGET, "bed group settled on the {} wall at {}mm", wall, offset);
                return Ok(());
            }
            Err(err) if backtrack => {
                trace!(target: TARGET, "bed candidate {} ({} wall, {}mm) failed: {}", index, wall, offset, err);
                first_error.get_or_insert(err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(first_error.unwrap_or_else(|| PlacementError::Bed {
        reason: format!(
            "no collision-free position for the bed on the {} wall(s)",
            walls.iter().map(|w| w.name()).collect::<Vec<_>>().join("/")
        ),
    }))
}

/// Length a wall needs to host the bed and the smallest bedside tables.
fn required_length(plan: &Plan) -> f64 {
    let (bed_w, _) = plan.request.bed.size.dimensions();
    let count = plan.request.bedside.count;
    if count == 0 {
        bed_w
    } else {
        bed_w + f64::from(count) * plan.options.bedside_min_width + plan.options.bed_group_margin
    }
}

/// Bed walls in the order they are tried.
///
/// A forced wall comes first when it qualifies; the remaining walls carry
/// neither door nor window and are ordered longest first, ties in
/// [`WallSide::ALL`] order.
fn bed_walls(plan: &Plan, state: &mut PlacementState) -> Result<SmallVec<[WallSide; 4]>, PlacementError> {
    let needed = required_length(plan);
    let qualifies = |side: WallSide| plan.room.wall_length(side) + EPSILON >= needed;

    let mut free: SmallVec<[WallSide; 4]> = WallSide::ALL
        .into_iter()
        .filter(|&side| !plan.openings.has_opening(side) && qualifies(side))
        .collect();
    // stable: equal lengths keep canonical order
    free.sort_by(|a, b| plan.room.wall_length(*b).total_cmp(&plan.room.wall_length(*a)));

    let mut walls = SmallVec::new();
    let forced = plan.request.bed.wall;
    if let Some(side) = forced {
        if side != plan.openings.window.wall && qualifies(side) {
            walls.push(side);
        }
    }
    for side in free {
        if !walls.contains(&side) {
            walls.push(side);
        }
    }

    let Some(&chosen) = walls.first() else {
        return Err(PlacementError::Bed {
            reason: format!("every wall either carries an opening or is shorter than {}mm", needed.round()),
        });
    };
    if let Some(requested) = forced {
        if requested != chosen {
            state.issues.push(Issue::BedWallOverridden { requested, chosen });
        }
    }
    debug!(target: TARGET, "bed wall candidates: {:?}", walls);
    Ok(walls)
}

/// Bed, headboard and side strips. `false` when the bed itself is blocked.
fn place_bed(plan: &Plan, state: &mut PlacementState, wall: WallSide, offset: f64) -> bool {
    let room = &plan.room;
    let (bed_w, bed_len) = plan.request.bed.size.dimensions();
    let bed = room.place_off_wall(wall, bed_w, bed_len, offset, 0.0);
    if !plan.accepts(&state.occupied, &bed, Tag::Solid(ItemKind::Bed), heights::BED) {
        trace!(target: TARGET, "bed rejected on the {} wall at {}mm", wall, offset);
        return false;
    }
    state.place(plan.item(ItemKind::Bed, bed, heights::BED, Some(wall)));
    state.bed = Some(BedPlacement { wall, offset });

    // same span as the bed, so it cannot collide once the bed has landed
    let headboard = room.place_off_wall(wall, bed_w, plan.options.headboard_thickness, offset, 0.0);
    state.place(plan.item(ItemKind::Headboard, headboard, plan.request.bed.headboard_height, Some(wall)));

    let access = plan.options.bed_side_access;
    let mut clipped = false;
    for along in [offset - access, offset + bed_w] {
        let strip = room.place_off_wall(wall, access, bed_len, along, 0.0);
        if strip.inside(&plan.floor) {
            state.occupied.insert(strip, Tag::Access(AccessKind::BedSide));
        } else {
            clipped = true;
        }
    }
    if clipped {
        state.issues.push(Issue::BedSideAccess { depth: access });
    }
    true
}

/// Steps 6 and 7 for a bed that has already landed.
fn place_around_bed(plan: &Plan, state: &mut PlacementState, wall: WallSide, offset: f64) -> Result<(), PlacementError> {
    place_bedside_tables(plan, state, wall, offset)?;
    wardrobe::place_wardrobe(plan, state, wall)
}

/// Tables flush against the bed sides, shrinking down the ladder until every
/// requested table fits. A single table goes on the lower-offset side.
fn place_bedside_tables(
    plan: &Plan,
    state: &mut PlacementState,
    wall: WallSide,
    offset: f64,
) -> Result<(), PlacementError> {
    let spec = plan.request.bedside;
    if spec.count == 0 {
        return Ok(());
    }
    let options = plan.options;
    let (bed_w, _) = plan.request.bed.size.dimensions();
    let sizes = bedside_sizes(
        (spec.width, spec.depth),
        (plan.room.wall_length(wall), plan.room.reach(wall)),
        options.bedside_step,
        (options.bedside_min_width, options.bedside_min_depth),
    );

    let found = first_success(sizes, |&(w, d)| {
        let mut tables: SmallVec<[_; 2]> = SmallVec::new();
        tables.push((ItemKind::BedsideLeft, plan.room.place_off_wall(wall, w, d, offset - w, 0.0)));
        if spec.count > 1 {
            tables.push((ItemKind::BedsideRight, plan.room.place_off_wall(wall, w, d, offset + bed_w, 0.0)));
        }
        let fits = tables
            .iter()
            .all(|(kind, rect)| plan.accepts(&state.occupied, rect, Tag::Solid(*kind), heights::BEDSIDE));
        if !fits {
            trace!(target: TARGET, "bedside tables rejected at {}x{}mm", w, d);
        }
        fits.then_some(tables)
    });

    let Some((size, tables)) = found else {
        return Err(PlacementError::Bedside {
            reason: format!(
                "{} table(s) do not fit beside the bed on the {} wall down to {}x{}mm",
                spec.count, wall, options.bedside_min_width, options.bedside_min_depth
            ),
        });
    };

    for (kind, rect) in tables {
        state.place(plan.item(kind, rect, heights::BEDSIDE, Some(wall)));
    }
    let requested = (spec.width, spec.depth);
    if size != requested {
        state.issues.push(Issue::BedsideReduced { from: requested, to: size });
    }
    state.bedside_size = Some(size);
    Ok(())
}
