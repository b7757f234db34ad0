//! The placement pipeline.
//!
//! One call to [`generate_layout`] runs every step in a fixed order over a
//! [`PlacementState`] it owns. Steps only register a placement after it has
//! been accepted, so rejected candidates never leave a trace. The bed group
//! is the one place that may backtrack: with
//! [`PlanOptions::bed_group_backtracking`] set, each bed candidate is tried
//! on a clone of the state and only the successful clone is kept.

mod bed;
mod clearance;
mod extras;
mod under_window;
mod wardrobe;

use indexmap::IndexMap;
use log::debug;
use roomplan_core::{PlacementError, PlanError, Rect, WallSide};

use crate::config::{PlanOptions, PlanRequest, UnderWindowUse, WardrobeConfig};
use crate::document::{
    DoorDescriptor, ItemKind, LayoutDocument, LayoutMetadata, OpeningSet, PlacedItem, RoomSummary, WallBand,
    WallSet, WindowDescriptor,
};
use crate::issues::IssueLog;
use crate::keepout::{door_keep_outs, window_strip, KeepOutZone};
use crate::occupied::{OccupiedSet, Tag};
use crate::opening::Openings;
use crate::room::Room;

pub use extras::{tv_sizing, TvSizing};
pub use under_window::{allowed_uses, resolve_use};

const TARGET: &str = "roomplan::placement";

/// Heights (mm) of items whose height is not configurable.
mod heights {
    pub const BED: f64 = 500.0;
    pub const BEDSIDE: f64 = 600.0;
    pub const BENCH: f64 = 450.0;
    pub const DESK: f64 = 750.0;
    pub const CHAIR: f64 = 900.0;
    pub const DRESSING_TABLE: f64 = 800.0;
    pub const DRESSER: f64 = 900.0;
    pub const BANQUET: f64 = 400.0;
}

/// Read-only inputs shared by every step.
pub(crate) struct Plan<'a> {
    pub request: &'a PlanRequest,
    pub options: &'a PlanOptions,
    pub room: Room,
    pub openings: Openings,
    pub floor: Rect,
    /// Deepened window strip that tall items must also avoid
    tall_strip: Option<Rect>,
}

impl<'a> Plan<'a> {
    fn new(request: &'a PlanRequest, options: &'a PlanOptions, room: Room, openings: Openings) -> Self {
        let tall_strip = options
            .tall_item_window_clear
            .map(|depth| window_strip(&room, &openings.window, depth).rect);
        Self {
            request,
            options,
            floor: room.internal_rect(),
            room,
            openings,
            tall_strip,
        }
    }

    /// Whether a candidate of the given height may occupy `rect`.
    pub fn accepts(&self, occupied: &OccupiedSet, rect: &Rect, tag: Tag, height: f64) -> bool {
        rect.inside(&self.floor) && !occupied.collides(rect, tag) && !self.blocks_window(rect, height)
    }

    fn blocks_window(&self, rect: &Rect, height: f64) -> bool {
        height > self.options.tall_item_height && self.tall_strip.map_or(false, |strip| rect.intersects(&strip))
    }

    pub fn item(&self, kind: ItemKind, rect: Rect, height: f64, wall: Option<WallSide>) -> PlacedItem {
        PlacedItem::new(&self.request.room_id, kind, rect, height, wall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BedPlacement {
    pub wall: WallSide,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WardrobePlacement {
    pub wall: WallSide,
    pub mode: WardrobeConfig,
}

/// Everything the pipeline accumulates for one call.
#[derive(Debug, Clone)]
pub(crate) struct PlacementState {
    pub occupied: OccupiedSet,
    pub furniture: IndexMap<ItemKind, PlacedItem>,
    pub enclosure: Vec<Rect>,
    pub keep_outs: Vec<KeepOutZone>,
    pub issues: IssueLog,
    pub window_use: UnderWindowUse,
    pub bed: Option<BedPlacement>,
    pub bedside_size: Option<(f64, f64)>,
    pub wardrobe: Option<WardrobePlacement>,
    pub tv_wall: Option<WallSide>,
}

impl PlacementState {
    fn new(issues: IssueLog) -> Self {
        Self {
            occupied: OccupiedSet::new(),
            furniture: IndexMap::new(),
            enclosure: Vec::new(),
            keep_outs: Vec::new(),
            issues,
            window_use: UnderWindowUse::None,
            bed: None,
            bedside_size: None,
            wardrobe: None,
            tv_wall: None,
        }
    }

    /// Register a solid item and record it in the furniture map.
    pub fn place(&mut self, item: PlacedItem) {
        debug!(target: TARGET, "placed {} at {:?}", item.kind, item.rect);
        self.occupied.insert(item.rect, Tag::Solid(item.kind));
        self.furniture.insert(item.kind, item);
    }

    pub fn add_keep_out(&mut self, zone: KeepOutZone) {
        self.occupied.insert_keep_out(&zone);
        self.keep_outs.push(zone);
    }
}

/// Generate a layout for one room.
///
/// Bed, bedside tables and wardrobe are mandatory: if any of them cannot be
/// placed after every documented fallback, the call fails with a
/// [`PlacementError`] naming the concern and no partial layout is returned.
/// TV, dressing table, dresser and banquet are best-effort.
pub fn generate_layout(request: &PlanRequest, options: &PlanOptions) -> Result<LayoutDocument, PlanError> {
    let (plan, mut state) = prepare(request, options)?;

    under_window::place(&plan, &mut state);
    bed::place_bed_group(&plan, &mut state)?;
    clearance::apply(&plan, &mut state);
    extras::place_tv(&plan, &mut state);
    extras::place_dressing_table(&plan, &mut state);
    extras::place_dresser(&plan, &mut state);
    extras::place_banquet(&plan, &mut state);

    assemble(&plan, state).map_err(PlanError::from)
}

/// Validate the request, derive the room and openings, and register the
/// door keep-outs.
fn prepare<'a>(request: &'a PlanRequest, options: &'a PlanOptions) -> Result<(Plan<'a>, PlacementState), PlanError> {
    request.validate()?;
    let room = Room::from_spec(&request.room)?;
    let mut issues = IssueLog::default();
    let openings = Openings::resolve(&room, &request.door, &request.window, &mut issues)?;
    let plan = Plan::new(request, options, room, openings);
    let mut state = PlacementState::new(issues);

    debug!(
        target: TARGET,
        "room {}x{}mm, door on {} wall, window on {} wall",
        room.internal_width,
        room.internal_depth,
        openings.door.wall,
        openings.window.wall
    );

    for zone in door_keep_outs(&plan.room, &plan.openings.door, options) {
        state.add_keep_out(zone);
    }
    Ok((plan, state))
}

fn assemble(plan: &Plan, state: PlacementState) -> Result<LayoutDocument, PlacementError> {
    let bed = state.bed.ok_or_else(|| PlacementError::Bed {
        reason: "bed group was not placed".into(),
    })?;
    let wardrobe = state.wardrobe.ok_or_else(|| PlacementError::Wardrobe {
        reason: "wardrobe was not placed".into(),
    })?;

    let request = plan.request;
    let room = &plan.room;
    let t = room.external_wall_thickness;
    let door = plan.openings.door;
    let window = plan.openings.window;
    let sizing = tv_sizing(room.area_m2());

    let external = WallSide::ALL
        .into_iter()
        .map(|side| WallBand {
            side,
            rect: wall_band(room, side),
            thickness: t,
        })
        .collect();

    Ok(LayoutDocument {
        room: RoomSummary {
            id: format!("ROOM-{}", request.room_id),
            internal_width: room.internal_width,
            internal_depth: room.internal_depth,
            external_width: room.external_width(),
            external_depth: room.external_depth(),
            height: room.height,
            external_wall_thickness: t,
            internal_wall_thickness: room.internal_wall_thickness,
            area_m2: room.area_m2(),
        },
        walls: WallSet {
            external,
            internal: plan.floor,
            internal_wall_thickness: room.internal_wall_thickness,
            wardrobe_enclosure: state.enclosure,
        },
        openings: OpeningSet {
            door: DoorDescriptor {
                id: format!("DOOR-{}-001", request.room_id),
                wall: door.wall,
                offset: door.offset,
                width: door.width,
                hinge: door.hinge,
                swing: door.swing,
                swing_radius: door.width,
                rect: plan.openings.door_rect(room),
            },
            window: WindowDescriptor {
                id: format!("WIN-{}-001", request.room_id),
                wall: window.wall,
                offset: window.offset,
                width: window.width,
                sill_height: window.sill_height,
                rect: plan.openings.window_rect(room),
            },
        },
        keep_outs: state.keep_outs,
        furniture: state.furniture,
        metadata: LayoutMetadata {
            door_wall: door.wall,
            window_wall: window.wall,
            bed_wall: bed.wall,
            bed_size: request.bed.size,
            wardrobe_wall: wardrobe.wall,
            wardrobe_mode: wardrobe.mode,
            requested_under_window_use: request.under_window_use,
            under_window_use: state.window_use,
            tv_wall: state.tv_wall,
            tv_size_inches: sizing.inches,
            viewing_distance: sizing.viewing_distance,
            tv_center_z: sizing.center_z,
            bedside_table_count: request.bedside.count,
            bedside_table_size: state.bedside_size,
            include_banquet: request.banquet.enabled,
            validation_issues: state.issues.messages(),
        },
    })
}

/// Full-length external wall band, corners included on the horizontal walls.
fn wall_band(room: &Room, side: WallSide) -> Rect {
    let t = room.external_wall_thickness;
    let w = room.external_width();
    let d = room.external_depth();
    match side {
        WallSide::Top => Rect::new(0.0, d - t, w, t),
        WallSide::Bottom => Rect::new(0.0, 0.0, w, t),
        WallSide::Left => Rect::new(0.0, t, t, d - 2.0 * t),
        WallSide::Right => Rect::new(w - t, t, t, d - 2.0 * t),
    }
}
