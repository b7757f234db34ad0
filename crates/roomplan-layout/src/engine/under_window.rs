//! Step 1: what goes under the window.

use log::{debug, trace};
use roomplan_core::{Rect, EPSILON};
use smallvec::SmallVec;

use super::{heights, Plan, PlacementState, TARGET};
use crate::config::UnderWindowUse;
use crate::document::ItemKind;
use crate::issues::Issue;
use crate::keepout::window_strip;
use crate::occupied::{AccessKind, Tag};

const BENCH_DEPTH: f64 = 400.0;
const BENCH_MIN_WIDTH: f64 = 800.0;
const BENCH_MARGIN: f64 = 200.0;
const DESK_DEPTH: f64 = 600.0;
const DESK_MIN_WIDTH: f64 = 1000.0;
const DESK_MAX_WIDTH: f64 = 1600.0;

/// Uses the sill height allows, lowest band first.
pub fn allowed_uses(sill_height: f64) -> &'static [UnderWindowUse] {
    if sill_height < 450.0 {
        &[UnderWindowUse::None]
    } else if sill_height < 600.0 {
        &[UnderWindowUse::None, UnderWindowUse::Bench]
    } else if sill_height <= 900.0 {
        &[UnderWindowUse::None, UnderWindowUse::Bench, UnderWindowUse::StudyTable]
    } else {
        &[UnderWindowUse::None]
    }
}

/// The requested use if the sill allows it, otherwise `None`.
pub fn resolve_use(requested: UnderWindowUse, sill_height: f64) -> UnderWindowUse {
    if allowed_uses(sill_height).contains(&requested) {
        requested
    } else {
        UnderWindowUse::None
    }
}

pub(super) fn place(plan: &Plan, state: &mut PlacementState) {
    let window = plan.openings.window;
    let requested = plan.request.under_window_use;
    let resolved = resolve_use(requested, window.sill_height);
    if resolved != requested {
        state.issues.push(Issue::UnderWindowDowngraded {
            requested,
            sill_height: window.sill_height,
            resolved,
        });
    }
    debug!(target: TARGET, "under-window use resolved to {}", resolved.label());

    let placed = match resolved {
        UnderWindowUse::None => false,
        UnderWindowUse::Bench => place_bench(plan, state),
        UnderWindowUse::StudyTable => place_desk(plan, state),
    };

    if resolved != UnderWindowUse::None && !placed {
        state.issues.push(Issue::UnderWindowBlocked { requested: resolved });
    }

    state.window_use = if placed { resolved } else { UnderWindowUse::None };
    if !placed {
        state.add_keep_out(window_strip(&plan.room, &window, plan.options.window_keep_clear));
    }
}

/// Offsets for an item of `along` under the window: centred on the window,
/// then flush with either jamb, clamped to the wall.
fn window_offsets(plan: &Plan, along: f64) -> SmallVec<[f64; 3]> {
    let window = plan.openings.window;
    let max_offset = (plan.room.wall_length(window.wall) - along).max(0.0);
    let mut out = SmallVec::new();
    for offset in [
        window.offset + (window.width - along) / 2.0,
        window.offset,
        window.offset + window.width - along,
    ] {
        let offset = offset.clamp(0.0, max_offset);
        if !out.iter().any(|o: &f64| (o - offset).abs() < EPSILON) {
            out.push(offset);
        }
    }
    out
}

fn place_bench(plan: &Plan, state: &mut PlacementState) -> bool {
    let window = plan.openings.window;
    let along = (window.width - BENCH_MARGIN).max(BENCH_MIN_WIDTH).min(window.width);
    let tag = Tag::Solid(ItemKind::Bench);

    let found = window_offsets(plan, along).into_iter().find_map(|offset| {
        let rect = plan.room.place_off_wall(window.wall, along, BENCH_DEPTH, offset, 0.0);
        if plan.accepts(&state.occupied, &rect, tag, heights::BENCH) {
            Some(rect)
        } else {
            trace!(target: TARGET, "bench rejected at offset {}", offset);
            None
        }
    });

    match found {
        Some(rect) => {
            state.place(plan.item(ItemKind::Bench, rect, heights::BENCH, Some(window.wall)));
            true
        }
        None => false,
    }
}

fn place_desk(plan: &Plan, state: &mut PlacementState) -> bool {
    let window = plan.openings.window;
    let along = window.width.clamp(DESK_MIN_WIDTH, DESK_MAX_WIDTH);
    let pullback_depth = plan.options.chair_pullback;

    let found = window_offsets(plan, along).into_iter().find_map(|offset| {
        let desk = plan.room.place_off_wall(window.wall, along, DESK_DEPTH, offset, 0.0);
        let pullback = plan.room.place_off_wall(window.wall, along, pullback_depth, offset, DESK_DEPTH);
        let ok = plan.accepts(&state.occupied, &desk, Tag::Solid(ItemKind::StudyTable), heights::DESK)
            && plan.accepts(&state.occupied, &pullback, Tag::Access(AccessKind::ChairPullback), 0.0);
        if !ok {
            trace!(target: TARGET, "study table rejected at offset {}", offset);
        }
        ok.then_some((desk, pullback))
    });

    let Some((desk, pullback)) = found else {
        return false;
    };

    state.place(plan.item(ItemKind::StudyTable, desk, heights::DESK, Some(window.wall)));
    if plan.request.chair {
        let chair = chair_in(&pullback, plan.options.chair_size);
        if plan.accepts(&state.occupied, &chair, Tag::Solid(ItemKind::Chair), heights::CHAIR) {
            state.place(plan.item(ItemKind::Chair, chair, heights::CHAIR, None));
        } else {
            state.issues.push(Issue::ChairSkipped);
        }
    }
    state.occupied.insert(pullback, Tag::Access(AccessKind::ChairPullback));
    true
}

/// Square chair footprint centred in the pull-back zone.
fn chair_in(pullback: &Rect, size: f64) -> Rect {
    let w = size.min(pullback.width);
    let d = size.min(pullback.depth);
    Rect::new(
        pullback.x + (pullback.width - w) / 2.0,
        pullback.y + (pullback.depth - d) / 2.0,
        w,
        d,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sill_bands() {
        assert_eq!(allowed_uses(300.0), &[UnderWindowUse::None]);
        assert_eq!(allowed_uses(450.0), &[UnderWindowUse::None, UnderWindowUse::Bench]);
        assert_eq!(allowed_uses(599.0).len(), 2);
        assert_eq!(allowed_uses(600.0).len(), 3);
        assert_eq!(allowed_uses(900.0).len(), 3);
        assert_eq!(allowed_uses(901.0), &[UnderWindowUse::None]);
    }

    #[test]
    fn test_study_table_downgrades_on_low_sill() {
        assert_eq!(resolve_use(UnderWindowUse::StudyTable, 500.0), UnderWindowUse::None);
        assert_eq!(resolve_use(UnderWindowUse::Bench, 500.0), UnderWindowUse::Bench);
        assert_eq!(resolve_use(UnderWindowUse::StudyTable, 750.0), UnderWindowUse::StudyTable);
        assert_eq!(resolve_use(UnderWindowUse::Bench, 1000.0), UnderWindowUse::None);
    }

    #[test]
    fn test_chair_is_centered_in_pullback() {
        let chair = chair_in(&Rect::new(1000.0, 500.0, 1600.0, 600.0), 500.0);
        assert!((chair.x - 1550.0).abs() < 0.001);
        assert!((chair.y - 550.0).abs() < 0.001);
        assert!((chair.width - 500.0).abs() < 0.001);
    }
}
