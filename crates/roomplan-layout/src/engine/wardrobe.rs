//! Step 7: the wardrobe, in the requested configuration or its fallback.

use log::{debug, trace};
use roomplan_core::{largest_first, PlacementError, Rect, WallSide, EPSILON};
use smallvec::SmallVec;

use super::{Plan, PlacementState, WardrobePlacement, TARGET};
use crate::config::{ReturnSide, WardrobeConfig};
use crate::document::ItemKind;
use crate::issues::Issue;
use crate::ladder::{first_success, slide_offsets, wardrobe_widths};
use crate::occupied::{AccessKind, OccupiedSet, Tag};

const REASON_WINDOW: &str = "it carries the window";
const REASON_FACING: &str = "it faces the bed";
const REASON_DOOR: &str = "a full-wall wardrobe cannot share it with the door";

type Stubs = SmallVec<[(ItemKind, Rect); 2]>;

/// An accepted wardrobe position, not yet registered.
struct Fit {
    wall: WallSide,
    width: f64,
    offset: f64,
    /// First slide of the largest clear segment
    centred: bool,
    rect: Rect,
    access: Rect,
    stubs: Stubs,
}

pub(super) fn place_wardrobe(plan: &Plan, state: &mut PlacementState, bed_wall: WallSide) -> Result<(), PlacementError> {
    let spec = plan.request.wardrobe;
    let walls = candidate_walls(plan, state, bed_wall);
    let requested = match spec.config {
        WardrobeConfig::Auto => WardrobeConfig::Centered,
        other => other,
    };
    debug!(target: TARGET, "wardrobe '{}' on candidate walls {:?}", requested.label(), walls);

    let special = match requested {
        WardrobeConfig::FullWall => full_wall(plan, state, &walls),
        WardrobeConfig::BuiltIn => sized(plan, &state.occupied, &walls, true),
        _ => None,
    };

    let (fit, mode) = match special {
        Some(fit) => (fit, requested),
        None => {
            if requested != WardrobeConfig::Centered {
                if !spec.allow_fallback {
                    return Err(PlacementError::Wardrobe {
                        reason: format!("'{}' does not fit and fallback is disabled", requested.label()),
                    });
                }
                state.issues.push(Issue::WardrobeFallback {
                    from: requested,
                    to: WardrobeConfig::Centered,
                });
            }
            let fit = sized(plan, &state.occupied, &walls, false).ok_or_else(|| exhausted(plan, &walls))?;
            (fit, WardrobeConfig::Centered)
        }
    };

    commit(plan, state, fit, mode);
    Ok(())
}

/// Walls the wardrobe may use: the preferred wall first, then left, right,
/// top and bottom. The window wall and the wall facing the bed are excluded.
fn candidate_walls(plan: &Plan, state: &mut PlacementState, bed_wall: WallSide) -> SmallVec<[WallSide; 4]> {
    let window = plan.openings.window.wall;
    let facing = bed_wall.opposite();
    let mut walls = SmallVec::new();

    if let Some(preferred) = plan.request.wardrobe.wall {
        if preferred == window {
            state.issues.push(Issue::WardrobeWallRejected {
                wall: preferred,
                reason: REASON_WINDOW,
            });
        } else if preferred == facing {
            state.issues.push(Issue::WardrobeWallRejected {
                wall: preferred,
                reason: REASON_FACING,
            });
        } else {
            walls.push(preferred);
        }
    }
    for side in [WallSide::Left, WallSide::Right, WallSide::Top, WallSide::Bottom] {
        if side != window && side != facing && !walls.contains(&side) {
            walls.push(side);
        }
    }
    walls
}

fn full_wall(plan: &Plan, state: &mut PlacementState, walls: &[WallSide]) -> Option<Fit> {
    for &wall in walls {
        if wall == plan.openings.door.wall {
            if plan.request.wardrobe.wall == Some(wall) {
                state.issues.push(Issue::WardrobeWallRejected {
                    wall,
                    reason: REASON_DOOR,
                });
            }
            continue;
        }
        let width = plan.room.wall_length(wall);
        if let Some((rect, access)) = try_fit(plan, &state.occupied, wall, width, 0.0) {
            return Some(Fit {
                wall,
                width,
                offset: 0.0,
                centred: true,
                rect,
                access,
                stubs: Stubs::new(),
            });
        }
        trace!(target: TARGET, "full-wall wardrobe rejected on the {} wall", wall);
    }
    None
}

/// Width ladder over every wall and clear segment, sliding along each
/// segment from its centre. Built-in candidates also need return stubs.
fn sized(plan: &Plan, occupied: &OccupiedSet, walls: &[WallSide], built_in: bool) -> Option<Fit> {
    let spec = plan.request.wardrobe;
    let options = plan.options;
    let step = options.wardrobe_width_step;

    let cap = walls
        .iter()
        .map(|&wall| plan.room.wall_length(wall))
        .fold(0.0, f64::max);

    let mut candidates = Vec::new();
    for width in wardrobe_widths(spec.width, step, options.wardrobe_min_width, cap) {
        for &wall in walls {
            let segments = plan.openings.clear_segments(&plan.room, wall, options.opening_buffer);
            for (i, segment) in largest_first(&segments).into_iter().enumerate() {
                for (j, offset) in slide_offsets(segment, width, step).into_iter().enumerate() {
                    candidates.push((wall, width, offset, i == 0 && j == 0));
                }
            }
        }
    }

    first_success(candidates, |&(wall, width, offset, centred)| {
        let (rect, access) = try_fit(plan, occupied, wall, width, offset)?;
        let stubs = if built_in {
            return_stubs(plan, occupied, wall, width, offset)?
        } else {
            Stubs::new()
        };
        Some(Fit {
            wall,
            width,
            offset,
            centred,
            rect,
            access,
            stubs,
        })
    })
    .map(|(_, fit)| fit)
}

/// Wardrobe body and front access strip, if both are clear.
fn try_fit(plan: &Plan, occupied: &OccupiedSet, wall: WallSide, width: f64, offset: f64) -> Option<(Rect, Rect)> {
    let spec = plan.request.wardrobe;
    let rect = plan.room.place_off_wall(wall, width, spec.depth, offset, 0.0);
    let access = plan
        .room
        .place_off_wall(wall, width, plan.options.wardrobe_access, offset, spec.depth);

    let ok = plan.accepts(occupied, &rect, Tag::Solid(ItemKind::Wardrobe), spec.height)
        && access.inside(&plan.floor)
        && !occupied.collides(&access, Tag::Access(AccessKind::WardrobeFront));
    if !ok {
        trace!(target: TARGET, "wardrobe {}mm rejected on the {} wall at {}mm", width, wall, offset);
    }
    ok.then_some((rect, access))
}

/// Return-wall stubs just outside the wardrobe ends. `None` when the built-in
/// needs a stub and none fits.
fn return_stubs(plan: &Plan, occupied: &OccupiedSet, wall: WallSide, width: f64, offset: f64) -> Option<Stubs> {
    let spec = plan.request.wardrobe;
    let mut stubs = Stubs::new();
    if !spec.return_wall {
        return Some(stubs);
    }

    let t = plan.options.return_wall_thickness;
    let run = plan.options.return_wall_run;
    let start = (
        ItemKind::WardrobeReturnWallStart,
        plan.room.place_off_wall(wall, t, run, offset - t, 0.0),
    );
    let end = (
        ItemKind::WardrobeReturnWallEnd,
        plan.room.place_off_wall(wall, t, run, offset + width, 0.0),
    );
    let fits = |(kind, rect): &(ItemKind, Rect)| plan.accepts(occupied, rect, Tag::Solid(*kind), plan.room.height);

    match spec.return_side {
        ReturnSide::Auto => stubs.extend([start, end].into_iter().filter(|stub| fits(stub))),
        ReturnSide::Start => stubs.extend([start, end].into_iter().find(|stub| fits(stub))),
        ReturnSide::End => stubs.extend([end, start].into_iter().find(|stub| fits(stub))),
    }
    (!stubs.is_empty()).then_some(stubs)
}

fn commit(plan: &Plan, state: &mut PlacementState, fit: Fit, mode: WardrobeConfig) {
    let spec = plan.request.wardrobe;
    state.place(plan.item(ItemKind::Wardrobe, fit.rect, spec.height, Some(fit.wall)));
    state.occupied.insert(fit.access, Tag::Access(AccessKind::WardrobeFront));

    if mode == WardrobeConfig::BuiltIn && spec.return_wall && spec.return_side == ReturnSide::Auto && fit.stubs.len() == 1 {
        state.issues.push(Issue::ReturnWallPartial { wall: fit.wall });
    }
    for (kind, rect) in fit.stubs {
        state.place(plan.item(kind, rect, plan.room.height, Some(fit.wall)));
        state.enclosure.push(rect);
    }

    if mode != WardrobeConfig::FullWall && (fit.width - spec.width).abs() > EPSILON {
        state.issues.push(Issue::WardrobeReduced {
            from: spec.width,
            to: fit.width,
        });
    }
    if !fit.centred {
        state.issues.push(Issue::WardrobeRepositioned {
            wall: fit.wall,
            offset: fit.offset,
        });
    }
    state.wardrobe = Some(WardrobePlacement { wall: fit.wall, mode });
}

fn exhausted(plan: &Plan, walls: &[WallSide]) -> PlacementError {
    let spec = plan.request.wardrobe;
    let floor = spec.width.min(plan.options.wardrobe_min_width);
    let reason = if walls.is_empty() {
        "no wall is available after excluding the window wall and the wall facing the bed".to_string()
    } else {
        format!(
            "no width from {}mm down to {}mm fits on the {} wall(s)",
            spec.width,
            floor,
            walls.iter().map(|w| w.name()).collect::<Vec<_>>().join("/")
        )
    };
    PlacementError::Wardrobe { reason }
}
