//! Validation issues raised when a soft constraint is relaxed.
//!
//! Issues are appended in the order the pipeline meets them and never cause
//! already-accepted placements to be rolled back.

use std::fmt;

use roomplan_core::WallSide;

use crate::config::{BedSize, UnderWindowUse, WardrobeConfig};

/// One relaxation of the caller's literal request.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    DoorOffsetClamped { wall: WallSide, from: f64, to: f64 },
    WindowOffsetClamped { wall: WallSide, from: f64, to: f64 },
    UnderWindowDowngraded {
        requested: UnderWindowUse,
        sill_height: f64,
        resolved: UnderWindowUse,
    },
    UnderWindowBlocked { requested: UnderWindowUse },
    ChairSkipped,
    BedWallOverridden { requested: WallSide, chosen: WallSide },
    BedRepositioned { wall: WallSide, offset: f64 },
    BedSideAccess { depth: f64 },
    BedsideReduced { from: (f64, f64), to: (f64, f64) },
    WardrobeWallRejected { wall: WallSide, reason: &'static str },
    WardrobeFallback { from: WardrobeConfig, to: WardrobeConfig },
    WardrobeReduced { from: f64, to: f64 },
    WardrobeRepositioned { wall: WallSide, offset: f64 },
    ReturnWallPartial { wall: WallSide },
    BedWardrobeClearance { gap: f64, required: f64 },
    BedGroupShifted { wall: WallSide, distance: f64 },
    TvUnplaced,
    BedSizeReduced { from: BedSize, to: BedSize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DoorOffsetClamped { wall, from, to } => write!(
                f,
                "Door offset was clamped from {}mm to {}mm so the door fits on the {} wall.",
                mm(*from),
                mm(*to),
                wall
            ),
            Issue::WindowOffsetClamped { wall, from, to } => write!(
                f,
                "Window offset was clamped from {}mm to {}mm so the window fits on the {} wall.",
                mm(*from),
                mm(*to),
                wall
            ),
            Issue::UnderWindowDowngraded {
                requested,
                sill_height,
                resolved,
            } => write!(
                f,
                "Under-window use '{}' is not allowed with a {}mm sill; using '{}'.",
                requested.label(),
                mm(*sill_height),
                resolved.label()
            ),
            Issue::UnderWindowBlocked { requested } => {
                let what = match requested {
                    UnderWindowUse::StudyTable => "Study table",
                    _ => "Bench",
                };
                write!(f, "{what} under window could not be placed without conflicts; keeping window clear.")
            }
            Issue::ChairSkipped => f.write_str("Chair could not be placed in the study table pull-back zone."),
            Issue::BedWallOverridden { requested, chosen } => write!(
                f,
                "Bed could not use the requested {} wall; placed on the {} wall instead.",
                requested, chosen
            ),
            Issue::BedRepositioned { wall, offset } => write!(
                f,
                "Bed was placed at {}mm along the {} wall instead of the preferred position to avoid conflicts.",
                mm(*offset),
                wall
            ),
            Issue::BedSideAccess { depth } => write!(
                f,
                "Bed side access ({}mm) could not be fully satisfied. Consider larger room or smaller bed.",
                mm(*depth)
            ),
            Issue::BedsideReduced { from, to } => write!(
                f,
                "Bedside tables were reduced from {}x{}mm to {}x{}mm to fit beside the bed.",
                mm(from.0),
                mm(from.1),
                mm(to.0),
                mm(to.1)
            ),
            Issue::WardrobeWallRejected { wall, reason } => {
                write!(f, "Wardrobe cannot use the {} wall: {}.", wall, reason)
            }
            Issue::WardrobeFallback { from, to } => write!(
                f,
                "Wardrobe configuration '{}' could not be placed; using '{}' instead.",
                from.label(),
                to.label()
            ),
            Issue::WardrobeReduced { from, to } => write!(
                f,
                "Wardrobe width was reduced from {}mm to {}mm to avoid conflicts.",
                mm(*from),
                mm(*to)
            ),
            Issue::WardrobeRepositioned { wall, offset } => write!(
                f,
                "Wardrobe was placed at {}mm along the {} wall instead of centred to avoid conflicts.",
                mm(*offset),
                wall
            ),
            Issue::ReturnWallPartial { wall } => write!(
                f,
                "Built-in wardrobe on the {} wall is closed by a return wall at one end only.",
                wall
            ),
            Issue::BedWardrobeClearance { gap, required } => write!(
                f,
                "Bed group is {}mm from the wardrobe; {}mm clearance is required.",
                mm(*gap),
                mm(*required)
            ),
            Issue::BedGroupShifted { wall, distance } => write!(
                f,
                "Bed group was shifted {}mm along the {} wall to clear the wardrobe.",
                mm(*distance),
                wall
            ),
            Issue::TvUnplaced => f.write_str("TV could not be placed on the required wall axis without conflicts."),
            Issue::BedSizeReduced { from, to } => write!(
                f,
                "Bed size was reduced from {} to {} so the bedside tables fit.",
                from.label(),
                to.label()
            ),
        }
    }
}

/// Millimetre values are whole numbers in every message.
fn mm(value: f64) -> i64 {
    value.round() as i64
}

/// Ordered, append-only issue list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueLog {
    issues: Vec<Issue>,
}

impl IssueLog {
    pub fn push(&mut self, issue: Issue) {
        log::warn!(target: "roomplan::placement", "{}", issue);
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Messages in the order they were raised.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wardrobe_reduction_message() {
        let issue = Issue::WardrobeReduced { from: 2400.0, to: 2000.0 };
        insta::assert_snapshot!(
            issue.to_string(),
            @"Wardrobe width was reduced from 2400mm to 2000mm to avoid conflicts."
        );
    }

    #[test]
    fn test_wardrobe_reposition_names_offset() {
        let issue = Issue::WardrobeRepositioned {
            wall: WallSide::Left,
            offset: 1999.9996,
        };
        insta::assert_snapshot!(
            issue.to_string(),
            @"Wardrobe was placed at 2000mm along the left wall instead of centred to avoid conflicts."
        );
    }

    #[test]
    fn test_bedside_reduction_names_both_sizes() {
        let issue = Issue::BedsideReduced {
            from: (450.0, 400.0),
            to: (400.0, 400.0),
        };
        insta::assert_snapshot!(
            issue.to_string(),
            @"Bedside tables were reduced from 450x400mm to 400x400mm to fit beside the bed."
        );
    }

    #[test]
    fn test_log_keeps_order() {
        let mut log = IssueLog::default();
        log.push(Issue::TvUnplaced);
        log.push(Issue::BedSideAccess { depth: 700.0 });
        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("TV"));
        assert!(messages[1].contains("700mm"));
    }
}
