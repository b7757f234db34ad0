//! Caller-side retry with smaller beds.
//!
//! The engine itself never changes the bed size. This wrapper re-runs the
//! whole pipeline one size class down, and only when the failure was the
//! bedside tables; every other error is returned as-is.

use log::{debug, info};
use roomplan_core::{Concern, PlacementError, PlanError};

use crate::config::{BedSize, PlanOptions, PlanRequest};
use crate::document::LayoutDocument;
use crate::engine::generate_layout;
use crate::issues::Issue;
use crate::ladder::bed_sizes;

const TARGET: &str = "roomplan::adapt";

/// A layout together with the bed size it settled on.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedLayout {
    pub document: LayoutDocument,
    pub bed_size: BedSize,
}

pub fn generate_with_bed_ladder(request: &PlanRequest, options: &PlanOptions) -> Result<AdaptedLayout, PlanError> {
    let requested = request.bed.size;
    let mut attempt = request.clone();
    let mut last_err = None;

    for size in bed_sizes(requested) {
        attempt.bed.size = size;
        match generate_layout(&attempt, options) {
            Ok(mut document) => {
                if size != requested {
                    let issue = Issue::BedSizeReduced { from: requested, to: size };
                    info!(target: TARGET, "{}", issue);
                    document.metadata.validation_issues.push(issue.to_string());
                }
                document.metadata.bed_size = size;
                return Ok(AdaptedLayout { document, bed_size: size });
            }
            Err(err) if err.concern() == Some(Concern::Bedside) => {
                debug!(target: TARGET, "{} bed failed on bedside tables: {}", size.label(), err);
                last_err = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        PlanError::from(PlacementError::Bedside {
            reason: format!("no bed size from {} down fits", requested.label()),
        })
    }))
}
