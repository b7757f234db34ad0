//! The solved layout handed to downstream collaborators.
//!
//! A [`LayoutDocument`] is plain data: renderers, exporters and costing read
//! it and never write back.

use indexmap::IndexMap;
use roomplan_core::{Rect, WallSide};

use crate::config::{BedSize, Hinge, Swing, UnderWindowUse, WardrobeConfig};
use crate::keepout::KeepOutZone;

/// Every furniture kind the engine can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Bed,
    Headboard,
    #[cfg_attr(feature = "serde", serde(rename = "bedside_table_left"))]
    BedsideLeft,
    #[cfg_attr(feature = "serde", serde(rename = "bedside_table_right"))]
    BedsideRight,
    Wardrobe,
    WardrobeReturnWallStart,
    WardrobeReturnWallEnd,
    TvUnit,
    DressingTable,
    Dresser,
    Bench,
    StudyTable,
    Chair,
    Banquet,
}

impl ItemKind {
    pub fn key(self) -> &'static str {
        match self {
            ItemKind::Bed => "bed",
            ItemKind::Headboard => "headboard",
            ItemKind::BedsideLeft => "bedside_table_left",
            ItemKind::BedsideRight => "bedside_table_right",
            ItemKind::Wardrobe => "wardrobe",
            ItemKind::WardrobeReturnWallStart => "wardrobe_return_wall_start",
            ItemKind::WardrobeReturnWallEnd => "wardrobe_return_wall_end",
            ItemKind::TvUnit => "tv_unit",
            ItemKind::DressingTable => "dressing_table",
            ItemKind::Dresser => "dresser",
            ItemKind::Bench => "bench",
            ItemKind::StudyTable => "study_table",
            ItemKind::Chair => "chair",
            ItemKind::Banquet => "banquet",
        }
    }

    /// Suffix of the generated item id.
    fn id_suffix(self) -> &'static str {
        match self {
            ItemKind::Bed => "BED",
            ItemKind::Headboard => "HEADBOARD",
            ItemKind::BedsideLeft => "BEDSIDE-L",
            ItemKind::BedsideRight => "BEDSIDE-R",
            ItemKind::Wardrobe => "WARDROBE",
            ItemKind::WardrobeReturnWallStart => "RETURN-START",
            ItemKind::WardrobeReturnWallEnd => "RETURN-END",
            ItemKind::TvUnit => "TV",
            ItemKind::DressingTable => "DRESSING",
            ItemKind::Dresser => "DRESSER",
            ItemKind::Bench => "BENCH",
            ItemKind::StudyTable => "DESK",
            ItemKind::Chair => "CHAIR",
            ItemKind::Banquet => "BANQUET",
        }
    }

    pub fn item_id(self, room_id: &str) -> String {
        format!("FUR-{}-{}", room_id, self.id_suffix())
    }

    pub fn is_bedside_table(self) -> bool {
        matches!(self, ItemKind::BedsideLeft | ItemKind::BedsideRight)
    }

    pub fn is_return_wall(self) -> bool {
        matches!(self, ItemKind::WardrobeReturnWallStart | ItemKind::WardrobeReturnWallEnd)
    }

    /// Items that move with the bed.
    pub fn is_bed_group(self) -> bool {
        matches!(self, ItemKind::Bed | ItemKind::Headboard) || self.is_bedside_table()
    }

    /// Parts nested in another item's footprint. They are exempt from
    /// pairwise overlap checks against their host.
    pub fn host(self) -> Option<ItemKind> {
        match self {
            ItemKind::Headboard => Some(ItemKind::Bed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One placed piece of furniture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub id: String,
    pub kind: ItemKind,
    pub rect: Rect,
    pub height: f64,
    /// Wall the item is attached to
    pub wall: Option<WallSide>,
    /// Height of the underside for wall-hung items
    pub mount_z: Option<f64>,
}

impl PlacedItem {
    pub fn new(room_id: &str, kind: ItemKind, rect: Rect, height: f64, wall: Option<WallSide>) -> Self {
        Self {
            id: kind.item_id(room_id),
            kind,
            rect,
            height,
            wall,
            mount_z: None,
        }
    }

    pub fn with_mount_z(mut self, mount_z: f64) -> Self {
        self.mount_z = Some(mount_z);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSummary {
    pub id: String,
    pub internal_width: f64,
    pub internal_depth: f64,
    pub external_width: f64,
    pub external_depth: f64,
    pub height: f64,
    pub external_wall_thickness: f64,
    pub internal_wall_thickness: f64,
    pub area_m2: f64,
}

/// Band of external wall on one side, for renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallBand {
    pub side: WallSide,
    pub rect: Rect,
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSet {
    pub external: Vec<WallBand>,
    /// Internal floor outline
    pub internal: Rect,
    pub internal_wall_thickness: f64,
    /// Return-wall stubs closing a built-in wardrobe
    pub wardrobe_enclosure: Vec<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorDescriptor {
    pub id: String,
    pub wall: WallSide,
    pub offset: f64,
    pub width: f64,
    pub hinge: Hinge,
    pub swing: Swing,
    pub swing_radius: f64,
    /// Leaf position inside the wall band
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowDescriptor {
    pub id: String,
    pub wall: WallSide,
    pub offset: f64,
    pub width: f64,
    pub sill_height: f64,
    /// Glazing position inside the wall band
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpeningSet {
    pub door: DoorDescriptor,
    pub window: WindowDescriptor,
}

/// Decisions the engine made, plus the validation issues it raised.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetadata {
    pub door_wall: WallSide,
    pub window_wall: WallSide,
    pub bed_wall: WallSide,
    pub bed_size: BedSize,
    pub wardrobe_wall: WallSide,
    /// Configuration the wardrobe was finally placed with
    pub wardrobe_mode: WardrobeConfig,
    pub requested_under_window_use: UnderWindowUse,
    pub under_window_use: UnderWindowUse,
    pub tv_wall: Option<WallSide>,
    pub tv_size_inches: u32,
    pub viewing_distance: f64,
    pub tv_center_z: f64,
    pub bedside_table_count: u8,
    /// Final `(width, depth)` of the bedside tables, after any shrinking
    pub bedside_table_size: Option<(f64, f64)>,
    pub include_banquet: bool,
    pub validation_issues: Vec<String>,
}

/// Complete output of one layout generation call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutDocument {
    pub room: RoomSummary,
    pub walls: WallSet,
    pub openings: OpeningSet,
    /// Door zones plus the window strip when nothing sits under the window
    pub keep_outs: Vec<KeepOutZone>,
    pub furniture: IndexMap<ItemKind, PlacedItem>,
    pub metadata: LayoutMetadata,
}

impl LayoutDocument {
    pub fn item(&self, kind: ItemKind) -> Option<&PlacedItem> {
        self.furniture.get(&kind)
    }

    pub fn has(&self, kind: ItemKind) -> bool {
        self.furniture.contains_key(&kind)
    }

    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.furniture.values()
    }

    pub fn issues(&self) -> &[String] {
        &self.metadata.validation_issues
    }

    /// Pairs of placed items whose footprints overlap, ignoring nested parts
    /// against their host. Empty for every layout the engine returns.
    pub fn overlapping_pairs(&self) -> Vec<(ItemKind, ItemKind)> {
        let items: Vec<&PlacedItem> = self.furniture.values().collect();
        let mut out = Vec::new();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                if a.kind.host() == Some(b.kind) || b.kind.host() == Some(a.kind) {
                    continue;
                }
                if a.rect.intersects(&b.rect) {
                    out.push((a.kind, b.kind));
                }
            }
        }
        out
    }
}
