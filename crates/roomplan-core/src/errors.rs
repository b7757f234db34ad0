//! Error types for the roomplan engine.

use std::fmt;

use thiserror::Error;

use crate::wall::WallSide;

/// Top-level error type for the roomplan engine.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl PlanError {
    /// The placement concern that failed, if this is a placement failure.
    pub fn concern(&self) -> Option<Concern> {
        match self {
            PlanError::Placement(err) => Some(err.concern()),
            _ => None,
        }
    }
}

/// Mandatory furniture groups whose placement can fail hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Bed,
    Bedside,
    Wardrobe,
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Concern::Bed => "bed",
            Concern::Bedside => "bedside",
            Concern::Wardrobe => "wardrobe",
        })
    }
}

/// Rejected request parameters, reported before any placement is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Room dimension '{field}' must be positive, got {value}mm")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("{opening} width {width}mm does not fit on the {wall} wall ({length}mm)")]
    OpeningTooWide {
        opening: &'static str,
        wall: WallSide,
        width: f64,
        length: f64,
    },

    #[error("Door offset {offset}mm lies outside the {wall} wall ({length}mm)")]
    DoorOffsetOutOfRange { wall: WallSide, offset: f64, length: f64 },

    #[error("Door and window cannot overlap on the {wall} wall")]
    OpeningsOverlap { wall: WallSide },

    #[error("Bedside table count must be 0, 1 or 2, got {count}")]
    BedsideCount { count: u8 },

    #[error("Furniture size '{field}' must be positive, got {value}mm")]
    NonPositiveSize { field: &'static str, value: f64 },
}

/// Hard placement failures. Each one aborts layout generation.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("No suitable wall for bed placement: {reason}")]
    Bed { reason: String },

    #[error("Bedside tables cannot be placed without conflicts: {reason}")]
    Bedside { reason: String },

    #[error("Wardrobe could not be placed without conflicts: {reason}")]
    Wardrobe { reason: String },
}

impl PlacementError {
    pub fn concern(&self) -> Concern {
        match self {
            PlacementError::Bed { .. } => Concern::Bed,
            PlacementError::Bedside { .. } => Concern::Bedside,
            PlacementError::Wardrobe { .. } => Concern::Wardrobe,
        }
    }
}

/// Errors raised by downstream collaborators while exporting a layout.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export format not supported: {format}")]
    UnsupportedFormat { format: String },

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("Layout has nothing to export")]
    EmptyLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concern_is_surfaced() {
        let err: PlanError = PlacementError::Bedside {
            reason: "bed wall too short".into(),
        }
        .into();
        assert_eq!(err.concern(), Some(Concern::Bedside));
        assert!(err.to_string().to_lowercase().contains("bedside"));

        let err: PlanError = ConfigError::BedsideCount { count: 3 }.into();
        assert_eq!(err.concern(), None);
    }
}
