//! Derive free time slots from merged busy intervals.
//!
//! Free time is the complement of the busy intervals within the configured
//! day window. Candidate gaps are the leading gap before the first busy
//! interval, the gaps between consecutive busy intervals and the trailing gap
//! after the last one. Candidates shorter than the minimum free duration are
//! discarded.

use crate::config::SlotConfig;
use crate::interval::Interval;
use crate::merge::merge_intervals;

/// Compute every gap in `window` not covered by `busy`, without threshold filtering.
///
/// `busy` must be sorted and disjoint, as produced by [`merge_intervals`].
/// Busy intervals are clipped to the window first, so no candidate extends
/// outside it. Zero-width gaps between consecutive busy intervals are kept.
pub fn candidate_gaps(busy: &[Interval], window: &Interval) -> Vec<Interval> {
    let clipped: Vec<Interval> = busy.iter().filter_map(|b| b.clip_to(window)).collect();

    let (first, last) = match (clipped.first(), clipped.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return vec![*window],
    };

    let mut gaps = Vec::with_capacity(clipped.len() + 1);

    if first.start() > window.start() {
        gaps.push(Interval::new_unchecked(window.start(), first.start()));
    }

    for pair in clipped.windows(2) {
        // Tolerate touching or out-of-order input rather than building an inverted gap.
        if pair[0].end() <= pair[1].start() {
            gaps.push(Interval::new_unchecked(pair[0].end(), pair[1].start()));
        }
    }

    if last.end() < window.end() {
        gaps.push(Interval::new_unchecked(last.end(), window.end()));
    }

    gaps
}

/// Derive the free slots of one day from its merged busy intervals.
///
/// Returns gaps within `config.window` of at least `config.min_free_minutes`,
/// in chronological order.
pub fn derive_free_slots(busy: &[Interval], config: &SlotConfig) -> Vec<Interval> {
    candidate_gaps(busy, &config.window)
        .into_iter()
        .filter(|gap| gap.duration_minutes() >= config.min_free_minutes)
        .collect()
}

/// Merge an unsorted day's busy intervals, then derive its free slots.
pub fn find_free_slots(busy: &[Interval], config: &SlotConfig) -> Vec<Interval> {
    derive_free_slots(&merge_intervals(busy), config)
}

/// Find the earliest free slot of at least `config.min_free_minutes`.
pub fn find_first_free_slot(busy: &[Interval], config: &SlotConfig) -> Option<Interval> {
    find_free_slots(busy, config).into_iter().next()
}
