//! Ordered candidate generators and the combinator that consumes them.
//!
//! Every retry in the pipeline is a ladder: a fixed, finite sequence of
//! candidates tried in order until one is accepted.

use roomplan_core::{Interval, EPSILON};
use smallvec::SmallVec;

use crate::config::BedSize;

/// First candidate accepted by `attempt`, together with its result.
pub fn first_success<C, T>(
    candidates: impl IntoIterator<Item = C>,
    mut attempt: impl FnMut(&C) -> Option<T>,
) -> Option<(C, T)> {
    candidates
        .into_iter()
        .find_map(|candidate| attempt(&candidate).map(|result| (candidate, result)))
}

fn push_unique(out: &mut SmallVec<[f64; 8]>, value: f64) {
    if !out.iter().any(|v| (v - value).abs() < EPSILON) {
        out.push(value);
    }
}

/// Bed offsets along a wall: centred, flush start, flush end, quarter and
/// three-quarter. Empty when the bed is longer than the wall.
pub fn bed_offsets(wall_length: f64, bed_width: f64) -> SmallVec<[f64; 8]> {
    let mut out = SmallVec::new();
    let slack = wall_length - bed_width;
    if slack < -EPSILON {
        return out;
    }
    let slack = slack.max(0.0);
    for offset in [slack / 2.0, 0.0, slack, slack * 0.25, slack * 0.75] {
        push_unique(&mut out, offset);
    }
    out
}

/// Number of whole steps to drop from `start` so it no longer exceeds `cap`.
fn steps_above(start: f64, step: f64, cap: f64) -> f64 {
    ((start - cap) / step - EPSILON).ceil().max(0.0)
}

/// Descending sizes from `start` in `step` decrements, never below `floor`.
///
/// Rungs above `cap` are skipped without leaving the step grid. The floor
/// itself is always the last rung. A start already below the floor yields
/// only the start.
pub fn descending(start: f64, step: f64, floor: f64, cap: f64) -> Vec<f64> {
    if start <= floor || step <= 0.0 {
        return vec![start];
    }
    let mut out = Vec::new();
    let mut value = start - steps_above(start, step, cap) * step;
    while value > floor + EPSILON {
        out.push(value);
        value -= step;
    }
    out.push(floor);
    out
}

/// Bedside table sizes `(width, depth)`, width-major, each axis capped by
/// `limit`.
pub fn bedside_sizes(requested: (f64, f64), limit: (f64, f64), step: f64, min: (f64, f64)) -> Vec<(f64, f64)> {
    let depths = descending(requested.1, step, min.1, limit.1);
    descending(requested.0, step, min.0, limit.0)
        .into_iter()
        .flat_map(|w| depths.iter().map(move |&d| (w, d)))
        .collect()
}

/// Wardrobe widths from the request down to the floor in fixed decrements.
///
/// Unlike [`descending`] the floor is only reached when it lies on the step
/// grid, so every reduced width is a whole number of steps below the request.
/// Widths longer than `cap` are never produced.
pub fn wardrobe_widths(requested: f64, step: f64, floor: f64, cap: f64) -> Vec<f64> {
    if step <= 0.0 {
        return vec![requested];
    }
    let skipped = steps_above(requested, step, cap);
    let mut out = Vec::new();
    let mut value = requested - skipped * step;
    if skipped == 0.0 {
        out.push(requested);
        value -= step;
    }
    while value >= floor - EPSILON {
        out.push(value);
        value -= step;
    }
    out
}

/// Offsets for a run of `length` inside `segment`: centred first, then
/// alternating either side in `step` increments, then both flush ends.
pub fn slide_offsets(segment: Interval, length: f64, step: f64) -> Vec<f64> {
    if !segment.fits(length) {
        return Vec::new();
    }
    let lo = segment.start;
    let hi = (segment.end - length).max(lo);
    let center = segment.centered(length).clamp(lo, hi);

    let mut out = vec![center];
    if step > 0.0 {
        let mut k = 1.0;
        loop {
            let below = center - k * step;
            let above = center + k * step;
            let mut any = false;
            if below >= lo - EPSILON {
                out.push(below);
                any = true;
            }
            if above <= hi + EPSILON {
                out.push(above);
                any = true;
            }
            if !any {
                break;
            }
            k += 1.0;
        }
    }
    for end in [lo, hi] {
        if !out.iter().any(|v| (v - end).abs() < EPSILON) {
            out.push(end);
        }
    }
    out
}

/// Bed sizes from `start` down to the smallest class.
pub fn bed_sizes(start: BedSize) -> impl Iterator<Item = BedSize> {
    std::iter::successors(Some(start), |size| size.smaller())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_success_stops_at_first_hit() {
        let mut tried = Vec::new();
        let hit = first_success([3, 5, 8, 10], |&n| {
            tried.push(n);
            (n % 2 == 0).then_some(n * 10)
        });
        assert_eq!(hit, Some((8, 80)));
        assert_eq!(tried, vec![3, 5, 8]);
        assert_eq!(first_success(Vec::<i32>::new(), |_| Some(())), None);
    }

    #[test]
    fn test_bed_offsets_order() {
        let offsets = bed_offsets(3900.0, 1600.0);
        let expected = [1150.0, 0.0, 2300.0, 575.0, 1725.0];
        assert_eq!(offsets.len(), expected.len());
        for (got, want) in offsets.iter().zip(expected) {
            assert!((got - want).abs() < 0.001);
        }
        assert!(bed_offsets(1500.0, 1600.0).is_empty());
        assert_eq!(bed_offsets(1600.0, 1600.0).as_slice(), &[0.0]);
    }

    #[test]
    fn test_bedside_ladder_is_width_major_and_bounded() {
        let sizes = bedside_sizes((450.0, 400.0), (3900.0, 3600.0), 50.0, (350.0, 300.0));
        assert_eq!(sizes.first(), Some(&(450.0, 400.0)));
        assert_eq!(sizes[1], (450.0, 350.0));
        assert_eq!(sizes[3], (400.0, 400.0));
        assert_eq!(sizes.last(), Some(&(350.0, 300.0)));
        assert_eq!(sizes.len(), 9);
        assert!(sizes.iter().all(|&(w, d)| w >= 350.0 && d >= 300.0));
    }

    #[test]
    fn test_descending_below_floor() {
        assert_eq!(descending(320.0, 50.0, 350.0, 3900.0), vec![320.0]);
        assert_eq!(descending(420.0, 50.0, 350.0, 3900.0), vec![420.0, 370.0, 350.0]);
    }

    #[test]
    fn test_wardrobe_widths() {
        let widths = wardrobe_widths(2400.0, 100.0, 1200.0, 3900.0);
        assert_eq!(widths.first(), Some(&2400.0));
        assert_eq!(widths.last(), Some(&1200.0));
        assert_eq!(widths.len(), 13);
        assert_eq!(wardrobe_widths(1000.0, 100.0, 1200.0, 3900.0), vec![1000.0]);
    }

    #[test]
    fn test_oversized_requests_start_at_the_cap() {
        let widths = wardrobe_widths(2_000_000.0, 100.0, 1200.0, 4000.0);
        assert_eq!(widths.first(), Some(&4000.0));
        assert_eq!(widths.len(), 29);

        // off-grid cap: stay on the request's grid
        let widths = wardrobe_widths(2450.0, 100.0, 1200.0, 2000.0);
        assert_eq!(widths.first(), Some(&1950.0));
        assert!(wardrobe_widths(5000.0, 100.0, 1200.0, 1000.0).is_empty());

        let sizes = bedside_sizes((1_000_000.0, 400.0), (3900.0, 3600.0), 50.0, (350.0, 300.0));
        assert_eq!(sizes.first(), Some(&(3900.0, 400.0)));
        assert_eq!(sizes.len(), 72 * 3);
        assert_eq!(descending(900.0, 50.0, 350.0, 400.0), vec![400.0, 350.0]);
    }

    #[test]
    fn test_slide_offsets() {
        let offsets = slide_offsets(Interval::new(0.0, 2000.0), 1600.0, 100.0);
        assert_eq!(offsets[0], 200.0);
        assert_eq!(&offsets[1..5], &[100.0, 300.0, 0.0, 400.0]);
        assert_eq!(offsets.len(), 5);
        assert!(slide_offsets(Interval::new(0.0, 1000.0), 1200.0, 100.0).is_empty());

        let offsets = slide_offsets(Interval::new(1300.0, 3900.0), 1800.0, 300.0);
        assert!((offsets[0] - 1700.0).abs() < 0.001);
        assert!(offsets.iter().any(|o| (o - 2100.0).abs() < 0.001));
        assert!(offsets.iter().any(|o| (o - 1300.0).abs() < 0.001));
    }

    #[test]
    fn test_bed_sizes_descend() {
        let sizes: Vec<_> = bed_sizes(BedSize::Queen).collect();
        assert_eq!(sizes, vec![BedSize::Queen, BedSize::Double, BedSize::Single]);
    }
}
