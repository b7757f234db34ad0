//! Layout request and engine options.
//!
//! [`PlanRequest`] is what the configuration surface hands to the engine;
//! [`PlanOptions`] holds clearances and policies that designers tune rarely.
//! Every section has production defaults so callers only override what they
//! collect from the user.

use roomplan_core::{ConfigError, WallSide};

/// Complete input for one layout generation call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanRequest {
    /// Prefix for generated item ids
    pub room_id: String,
    pub room: RoomSpec,
    pub door: DoorSpec,
    pub window: WindowSpec,
    pub under_window_use: UnderWindowUse,
    pub bed: BedSpec,
    pub bedside: BedsideSpec,
    pub wardrobe: WardrobeSpec,
    pub tv: TvSpec,
    pub dressing_table: DressingTableSpec,
    pub dresser: DresserSpec,
    /// Place a chair footprint with an under-window desk
    pub chair: bool,
    pub banquet: BanquetSpec,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            room_id: "ROOM".to_string(),
            room: RoomSpec::default(),
            door: DoorSpec::default(),
            window: WindowSpec::default(),
            under_window_use: UnderWindowUse::None,
            bed: BedSpec::default(),
            bedside: BedsideSpec::default(),
            wardrobe: WardrobeSpec::default(),
            tv: TvSpec::default(),
            dressing_table: DressingTableSpec::default(),
            dresser: DresserSpec::default(),
            chair: true,
            banquet: BanquetSpec::default(),
        }
    }
}

impl PlanRequest {
    /// Reject furniture parameters the engine cannot work with.
    ///
    /// Room dimensions and openings are checked when the room model and the
    /// openings are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bedside.count > 2 {
            return Err(ConfigError::BedsideCount {
                count: self.bedside.count,
            });
        }

        let mut sizes = vec![
            ("wardrobe.width", self.wardrobe.width),
            ("wardrobe.depth", self.wardrobe.depth),
            ("wardrobe.height", self.wardrobe.height),
        ];
        if self.bedside.count > 0 {
            sizes.push(("bedside.width", self.bedside.width));
            sizes.push(("bedside.depth", self.bedside.depth));
        }
        if self.tv.enabled {
            sizes.push(("tv.width", self.tv.width));
            sizes.push(("tv.depth", self.tv.depth));
        }
        if self.dressing_table.enabled {
            sizes.push(("dressing_table.width", self.dressing_table.width));
            sizes.push(("dressing_table.depth", self.dressing_table.depth));
        }
        if self.dresser.enabled {
            sizes.push(("dresser.width", self.dresser.width));
            sizes.push(("dresser.depth", self.dresser.depth));
        }
        if self.banquet.enabled {
            sizes.push(("banquet.width", self.banquet.width));
            sizes.push(("banquet.depth", self.banquet.depth));
        }

        match sizes.into_iter().find(|&(_, value)| !(value > 0.0)) {
            Some((field, value)) => Err(ConfigError::NonPositiveSize { field, value }),
            None => Ok(()),
        }
    }
}

/// Internal room dimensions and wall build-up (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoomSpec {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub external_wall_thickness: f64,
    pub internal_wall_thickness: f64,
}

impl Default for RoomSpec {
    fn default() -> Self {
        Self {
            width: 3900.0,
            depth: 3600.0,
            height: 3000.0,
            external_wall_thickness: 250.0,
            internal_wall_thickness: 120.0,
        }
    }
}

/// Which end of the door span carries the hinge, seen from inside the room
/// looking along the wall from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Hinge {
    /// Hinge at the end nearest the wall start
    #[default]
    Left,
    /// Hinge at the end furthest from the wall start
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Swing {
    #[default]
    Inward,
    Outward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DoorSpec {
    pub wall: WallSide,
    /// Distance from the wall start to the door edge
    pub offset: f64,
    pub width: f64,
    pub hinge: Hinge,
    pub swing: Swing,
}

impl Default for DoorSpec {
    fn default() -> Self {
        Self {
            wall: WallSide::Top,
            offset: 200.0,
            width: 900.0,
            hinge: Hinge::Left,
            swing: Swing::Inward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowSpec {
    pub wall: WallSide,
    pub width: f64,
    pub sill_height: f64,
    /// Distance from the wall start; `None` centres the window on its wall
    pub offset: Option<f64>,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            wall: WallSide::Right,
            width: 1800.0,
            sill_height: 300.0,
            offset: None,
        }
    }
}

/// What the caller would like to put under the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnderWindowUse {
    #[default]
    None,
    Bench,
    StudyTable,
}

impl UnderWindowUse {
    pub fn label(self) -> &'static str {
        match self {
            UnderWindowUse::None => "none",
            UnderWindowUse::Bench => "bench",
            UnderWindowUse::StudyTable => "study_table",
        }
    }
}

/// Standard mattress classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BedSize {
    Single,
    Double,
    #[default]
    Queen,
    King,
}

impl BedSize {
    /// Largest first.
    pub const LADDER: [BedSize; 4] = [BedSize::King, BedSize::Queen, BedSize::Double, BedSize::Single];

    /// `(width along the headboard wall, length into the room)`.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            BedSize::Single => (1200.0, 1900.0),
            BedSize::Double => (1400.0, 1900.0),
            BedSize::Queen => (1600.0, 2000.0),
            BedSize::King => (1800.0, 2000.0),
        }
    }

    /// Next smaller class, if any.
    pub fn smaller(self) -> Option<BedSize> {
        match self {
            BedSize::King => Some(BedSize::Queen),
            BedSize::Queen => Some(BedSize::Double),
            BedSize::Double => Some(BedSize::Single),
            BedSize::Single => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BedSize::Single => "single",
            BedSize::Double => "double",
            BedSize::Queen => "queen",
            BedSize::King => "king",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BedSpec {
    /// Forced headboard wall; `None` lets the engine choose
    pub wall: Option<WallSide>,
    pub size: BedSize,
    pub headboard_height: f64,
}

impl Default for BedSpec {
    fn default() -> Self {
        Self {
            wall: None,
            size: BedSize::Queen,
            headboard_height: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BedsideSpec {
    /// 0, 1 (left only) or 2
    pub count: u8,
    /// Along the bed wall
    pub width: f64,
    /// Into the room
    pub depth: f64,
}

impl Default for BedsideSpec {
    fn default() -> Self {
        Self {
            count: 2,
            width: 450.0,
            depth: 400.0,
        }
    }
}

/// Requested wardrobe arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WardrobeConfig {
    /// Resolves to `Centered`
    #[default]
    Auto,
    Centered,
    FullWall,
    BuiltIn,
}

impl WardrobeConfig {
    pub fn label(self) -> &'static str {
        match self {
            WardrobeConfig::Auto => "auto",
            WardrobeConfig::Centered => "centered",
            WardrobeConfig::FullWall => "full_wall",
            WardrobeConfig::BuiltIn => "built_in",
        }
    }
}

/// Preferred end for built-in return walls, in wall coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnSide {
    #[default]
    Auto,
    #[cfg_attr(feature = "serde", serde(alias = "left"))]
    Start,
    #[cfg_attr(feature = "serde", serde(alias = "right"))]
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WardrobeSpec {
    pub config: WardrobeConfig,
    /// Wall tried first, if it is an eligible wardrobe wall
    pub wall: Option<WallSide>,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub return_wall: bool,
    pub return_side: ReturnSide,
    /// Degrade `full_wall`/`built_in` to `centered` when they cannot be placed
    pub allow_fallback: bool,
}

impl Default for WardrobeSpec {
    fn default() -> Self {
        Self {
            config: WardrobeConfig::Auto,
            wall: None,
            width: 1800.0,
            depth: 600.0,
            height: 2200.0,
            return_wall: true,
            return_side: ReturnSide::Auto,
            allow_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TvSpec {
    pub enabled: bool,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Default for TvSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1200.0,
            depth: 250.0,
            height: 500.0,
        }
    }
}

/// Side of the TV, in wall coordinates: `Left` is towards the wall start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DressingTableSpec {
    pub enabled: bool,
    pub width: f64,
    pub depth: f64,
    pub side: Side,
}

impl Default for DressingTableSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1200.0,
            depth: 500.0,
            side: Side::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DresserSpec {
    pub enabled: bool,
    pub width: f64,
    pub depth: f64,
}

impl Default for DresserSpec {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 1200.0,
            depth: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BanquetSpec {
    pub enabled: bool,
    pub width: f64,
    pub depth: f64,
}

impl Default for BanquetSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1400.0,
            depth: 500.0,
        }
    }
}

/// How the bed–wardrobe gap is treated after the wardrobe lands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClearancePolicy {
    /// No check
    #[default]
    Off,
    /// Record an issue when the gap is below the given distance
    Advisory(f64),
    /// Slide the bed group along its wall to reach the distance
    Enforce(f64),
}

/// Clearances and policies used by the placement pipeline (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanOptions {
    pub bed_side_access: f64,
    pub wardrobe_access: f64,
    pub door_approach_depth: f64,
    pub door_approach_min_width: f64,
    pub window_keep_clear: f64,
    /// Items taller than this see a deepened window strip
    pub tall_item_height: f64,
    /// Depth of the deepened strip; `None` disables the correction
    pub tall_item_window_clear: Option<f64>,
    pub chair_pullback: f64,
    pub chair_size: f64,
    /// Buffer around door/window spans when computing clear wall segments
    pub opening_buffer: f64,
    /// Buffer around the window span when a TV sits beside it
    pub tv_window_buffer: f64,
    pub return_wall_run: f64,
    pub return_wall_thickness: f64,
    pub wardrobe_width_step: f64,
    pub wardrobe_min_width: f64,
    pub bedside_step: f64,
    pub bedside_min_width: f64,
    pub bedside_min_depth: f64,
    /// Slack added to the bed group length when qualifying a bed wall
    pub bed_group_margin: f64,
    pub headboard_thickness: f64,
    pub banquet_gap: f64,
    pub bed_wardrobe_clearance: ClearancePolicy,
    /// Move the bed to its next candidate when the bedside tables or the
    /// wardrobe cannot be placed around it. When off, the bed stays at the
    /// first collision-free candidate and those failures are returned.
    pub bed_group_backtracking: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            bed_side_access: 700.0,
            wardrobe_access: 900.0,
            door_approach_depth: 900.0,
            door_approach_min_width: 900.0,
            window_keep_clear: 300.0,
            tall_item_height: 1500.0,
            tall_item_window_clear: Some(600.0),
            chair_pullback: 600.0,
            chair_size: 500.0,
            opening_buffer: 200.0,
            tv_window_buffer: 250.0,
            return_wall_run: 600.0,
            return_wall_thickness: 120.0,
            wardrobe_width_step: 100.0,
            wardrobe_min_width: 1200.0,
            bedside_step: 50.0,
            bedside_min_width: 350.0,
            bedside_min_depth: 300.0,
            bed_group_margin: 100.0,
            headboard_thickness: 50.0,
            banquet_gap: 100.0,
            bed_wardrobe_clearance: ClearancePolicy::Off,
            bed_group_backtracking: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_ladder_descends() {
        let mut size = BedSize::King;
        let mut seen = vec![size];
        while let Some(next) = size.smaller() {
            assert!(next.dimensions().0 < size.dimensions().0);
            seen.push(next);
            size = next;
        }
        assert_eq!(seen, BedSize::LADDER.to_vec());
    }

    #[test]
    fn test_defaults() {
        let req = PlanRequest::default();
        assert_eq!(req.bed.size.dimensions(), (1600.0, 2000.0));
        assert_eq!(req.bedside.count, 2);
        assert_eq!(req.door.wall, WallSide::Top);
        assert_eq!(req.window.wall, WallSide::Right);
        assert_eq!(PlanOptions::default().bed_wardrobe_clearance, ClearancePolicy::Off);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut req = PlanRequest::default();
        req.bedside.count = 3;
        assert!(matches!(req.validate(), Err(ConfigError::BedsideCount { count: 3 })));

        let mut req = PlanRequest::default();
        req.wardrobe.width = 0.0;
        assert!(matches!(
            req.validate(),
            Err(ConfigError::NonPositiveSize { field: "wardrobe.width", .. })
        ));

        // Disabled items are not checked
        let mut req = PlanRequest::default();
        req.dresser.width = -1.0;
        assert!(req.validate().is_ok());
    }
}
