//! Collapse overlapping busy intervals into maximal disjoint spans.
//!
//! Sorts intervals by `(start, end)`, then sweeps once, fusing each interval
//! into the previous span when it overlaps or touches it. Touching intervals
//! (`current.start == last.end`) are fused: a zero-width gap is not free time.

use crate::interval::Interval;

/// Merge a day's busy intervals.
///
/// Input may be empty, unsorted and overlapping. The result is sorted by start,
/// and consecutive entries satisfy `merged[i].end < merged[i + 1].start`. Its
/// union equals the union of the input.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for current in sorted {
        if let Some(last) = merged.last_mut() {
            if current.start() <= last.end() {
                last.extend_to(current.end());
                continue;
            }
        }
        merged.push(current);
    }

    merged
}
