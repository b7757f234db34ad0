//! Wall naming for rectangular rooms.

use std::fmt;
use std::str::FromStr;

/// One of the four walls of a rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Direction a wall runs in plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Runs along X (top and bottom walls)
    Horizontal,
    /// Runs along Y (left and right walls)
    Vertical,
}

impl WallSide {
    /// All walls in canonical order.
    pub const ALL: [WallSide; 4] = [WallSide::Top, WallSide::Bottom, WallSide::Left, WallSide::Right];

    pub fn orientation(self) -> Orientation {
        match self {
            WallSide::Top | WallSide::Bottom => Orientation::Horizontal,
            WallSide::Left | WallSide::Right => Orientation::Vertical,
        }
    }

    /// The wall facing this one across the room.
    pub fn opposite(self) -> WallSide {
        match self {
            WallSide::Top => WallSide::Bottom,
            WallSide::Bottom => WallSide::Top,
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WallSide::Top => "top",
            WallSide::Bottom => "bottom",
            WallSide::Left => "left",
            WallSide::Right => "right",
        }
    }
}

impl fmt::Display for WallSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WallSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(WallSide::Top),
            "bottom" => Ok(WallSide::Bottom),
            "left" => Ok(WallSide::Left),
            "right" => Ok(WallSide::Right),
            other => Err(format!("unknown wall '{}'", other)),
        }
    }
}
