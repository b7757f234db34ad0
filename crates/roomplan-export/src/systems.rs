//! Electrical, lighting and air-conditioning take-off.
//!
//! Everything is derived from the solved layout: sockets follow the placed
//! bedside tables, TV unit and dressing table, while lighting and cooling
//! follow the internal floor area.

use std::fmt;

use roomplan_layout::{ItemKind, LayoutDocument};
use serde::Serialize;

const SOCKET_TYPE: &str = "5-pin socket";
const SOCKET_COST: f64 = 25.0;
const LIGHT_WATTAGE: u32 = 15;
const LIGHT_COST: f64 = 50.0;
/// Floor area served by one fitting (mm²)
const AREA_PER_LIGHT: f64 = 4_000_000.0;
const BASE_LIGHTS: usize = 2;

/// Standard split-unit capacities (HP), smallest first.
pub const AC_LADDER: [f64; 5] = [1.5, 2.25, 3.0, 4.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingType {
    #[default]
    Recessed,
    Pendant,
    Track,
}

impl fmt::Display for LightingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LightingType::Recessed => "recessed",
            LightingType::Pendant => "pendant",
            LightingType::Track => "track",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcType {
    #[default]
    Split,
    Concealed,
}

impl fmt::Display for AcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AcType::Split => "split",
            AcType::Concealed => "concealed",
        })
    }
}

/// Which services to take off, and their types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemsOptions {
    pub electrical: bool,
    pub lighting: bool,
    pub ac: bool,
    pub lighting_type: LightingType,
    pub ac_type: AcType,
}

impl Default for SystemsOptions {
    fn default() -> Self {
        Self {
            electrical: true,
            lighting: true,
            ac: true,
            lighting_type: LightingType::Recessed,
            ac_type: AcType::Split,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Socket {
    pub id: String,
    pub kind: &'static str,
    /// Item the socket serves
    pub location: &'static str,
    pub quantity: u32,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Light {
    pub id: String,
    pub kind: LightingType,
    pub wattage: u32,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcUnit {
    pub id: String,
    pub kind: AcType,
    pub capacity_hp: f64,
    pub capacity_btu: u32,
    pub unit_cost: f64,
}

/// Services for one room.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemsTakeoff {
    pub sockets: Vec<Socket>,
    pub lights: Vec<Light>,
    pub ac: Option<AcUnit>,
}

/// Smallest standard capacity covering one HP per 10 m², capped at the
/// largest unit.
pub fn ac_capacity_hp(area_m2: f64) -> f64 {
    let needed = area_m2 / 10.0;
    AC_LADDER
        .into_iter()
        .find(|&hp| hp >= needed)
        .unwrap_or(AC_LADDER[AC_LADDER.len() - 1])
}

/// Number of ceiling fittings for a floor area given in mm².
pub fn light_count(area_mm2: f64) -> usize {
    (area_mm2 / AREA_PER_LIGHT).floor() as usize + BASE_LIGHTS
}

pub fn take_off(layout: &LayoutDocument, options: &SystemsOptions) -> SystemsTakeoff {
    let room_id = layout.room.id.strip_prefix("ROOM-").unwrap_or(&layout.room.id);
    let mut takeoff = SystemsTakeoff::default();

    if options.electrical {
        let points = [
            (ItemKind::TvUnit, "tv_wall", 2),
            (ItemKind::BedsideLeft, "bedside_left", 1),
            (ItemKind::BedsideRight, "bedside_right", 1),
            (ItemKind::DressingTable, "dressing_table", 1),
        ];
        takeoff.sockets = points
            .into_iter()
            .filter(|(kind, _, _)| layout.has(*kind))
            .enumerate()
            .map(|(i, (_, location, quantity))| Socket {
                id: format!("ELEC-{}-{:03}", room_id, i + 1),
                kind: SOCKET_TYPE,
                location,
                quantity,
                unit_cost: SOCKET_COST,
            })
            .collect();
    }

    if options.lighting {
        let area = layout.room.internal_width * layout.room.internal_depth;
        takeoff.lights = (1..=light_count(area))
            .map(|i| Light {
                id: format!("LIGHT-{}-{:03}", room_id, i),
                kind: options.lighting_type,
                wattage: LIGHT_WATTAGE,
                unit_cost: LIGHT_COST,
            })
            .collect();
    }

    if options.ac {
        let hp = ac_capacity_hp(layout.room.area_m2);
        takeoff.ac = Some(AcUnit {
            id: format!("AC-{}-001", room_id),
            kind: options.ac_type,
            capacity_hp: hp,
            capacity_btu: (hp * 12_000.0 / 1.5) as u32,
            unit_cost: (hp * 500.0).floor(),
        });
    }

    takeoff
}
