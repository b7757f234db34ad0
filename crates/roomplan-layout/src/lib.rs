//! Deterministic furniture placement for rectangular bedrooms.
//!
//! Given the room, one door and one window, this crate places the bed
//! group, wardrobe and optional pieces as axis-aligned rectangles that never
//! overlap each other, the door zones or the window strip.
//!
//! # Architecture
//!
//! 1. **Room model**: four named walls and the single along/into mapping
//! 2. **Openings and keep-outs**: door swing and approach, window strip
//! 3. **Placement**: a fixed pipeline of steps, each trying an ordered ladder
//!    of candidates against the occupied set
//! 4. **Document**: the solved layout plus every relaxation as an issue
//!
//! # Example
//!
//! ```ignore
//! use roomplan_layout::{generate_layout, ItemKind, PlanOptions, PlanRequest};
//!
//! let request = PlanRequest::default();
//! let layout = generate_layout(&request, &PlanOptions::default())?;
//!
//! let bed = layout.item(ItemKind::Bed).unwrap();
//! println!("bed on the {} wall at {:?}", layout.metadata.bed_wall, bed.rect);
//! for issue in layout.issues() {
//!     println!("{issue}");
//! }
//! ```

mod adapt;
mod config;
mod document;
mod engine;
mod issues;
mod keepout;
mod ladder;
mod occupied;
mod opening;
mod room;

pub use adapt::{generate_with_bed_ladder, AdaptedLayout};
pub use config::{
    BanquetSpec, BedSize, BedSpec, BedsideSpec, ClearancePolicy, DoorSpec, DresserSpec, DressingTableSpec, Hinge,
    PlanOptions, PlanRequest, ReturnSide, RoomSpec, Side, Swing, TvSpec, UnderWindowUse, WardrobeConfig, WardrobeSpec,
    WindowSpec,
};
pub use document::{
    DoorDescriptor, ItemKind, LayoutDocument, LayoutMetadata, OpeningSet, PlacedItem, RoomSummary, WallBand, WallSet,
    WindowDescriptor,
};
pub use engine::{allowed_uses, generate_layout, resolve_use, tv_sizing, TvSizing};
pub use issues::Issue;
pub use keepout::{KeepOutKind, KeepOutZone};
pub use room::{AlongPosition, Room, WallInfo};

pub use roomplan_core::{Concern, PlanError, Rect, WallSide};
