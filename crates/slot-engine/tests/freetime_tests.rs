//! Tests for deriving free slots from merged busy intervals.

use chrono::Weekday;
use slot_engine::{
    candidate_gaps, derive_free_slots, find_first_free_slot, find_free_slots, merge_intervals,
    Interval, SlotConfig,
};

fn iv(start: &str, end: &str) -> Interval {
    Interval::parse(start, end).unwrap()
}

/// Window 08:00-22:00, minimum 60 minutes.
fn default_config() -> SlotConfig {
    SlotConfig::default()
}

fn config(start: &str, end: &str, min: u16) -> SlotConfig {
    SlotConfig::new(iv(start, end), min, vec![Weekday::Mon])
}

// ── Scenarios ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_busy_leaves_leading_and_trailing_slots() {
    // Busy 09:00-10:00 and 09:30-11:00 merge to 09:00-11:00.
    // Free: 08:00-09:00 (60, kept) and 11:00-22:00 (660, kept).
    let busy = merge_intervals(&[iv("09:00", "10:00"), iv("09:30", "11:00")]);
    assert_eq!(busy, vec![Interval::from_minutes(540, 660).unwrap()]);

    let free = derive_free_slots(&busy, &default_config());
    assert_eq!(free, vec![iv("08:00", "09:00"), iv("11:00", "22:00")]);
    assert_eq!(free[0].duration_minutes(), 60);
    assert_eq!(free[1].duration_minutes(), 660);
}

#[test]
fn no_busy_intervals_frees_entire_window() {
    let free = derive_free_slots(&[], &default_config());
    assert_eq!(free, vec![Interval::from_minutes(480, 1320).unwrap()]);
}

#[test]
fn busy_spanning_window_leaves_nothing() {
    let busy = merge_intervals(&[iv("08:00", "22:00")]);
    assert_eq!(busy, vec![Interval::from_minutes(480, 1320).unwrap()]);
    assert!(derive_free_slots(&busy, &default_config()).is_empty());
    assert!(candidate_gaps(&busy, &default_config().window).is_empty());
}

#[test]
fn gap_below_threshold_is_computed_then_discarded() {
    // 30-minute gap between 10:00 and 10:30.
    let busy = merge_intervals(&[iv("08:00", "10:00"), iv("10:30", "22:00")]);

    let candidates = candidate_gaps(&busy, &default_config().window);
    assert_eq!(candidates, vec![iv("10:00", "10:30")]);

    assert!(derive_free_slots(&busy, &default_config()).is_empty());
}

// ── Window edges ───────────────────────────────────────────────────────────

#[test]
fn busy_starting_at_window_start_suppresses_leading_gap() {
    let busy = vec![iv("08:00", "12:00")];
    assert_eq!(
        candidate_gaps(&busy, &default_config().window),
        vec![iv("12:00", "22:00")]
    );
}

#[test]
fn busy_ending_at_window_end_suppresses_trailing_gap() {
    let busy = vec![iv("18:00", "22:00")];
    assert_eq!(
        candidate_gaps(&busy, &default_config().window),
        vec![iv("08:00", "18:00")]
    );
}

#[test]
fn gaps_between_busy_intervals_are_in_chronological_order() {
    let busy = merge_intervals(&[
        iv("15:00", "16:00"),
        iv("09:00", "10:00"),
        iv("12:00", "13:00"),
    ]);
    let free = derive_free_slots(&busy, &default_config());
    assert_eq!(
        free,
        vec![
            iv("08:00", "09:00"),
            iv("10:00", "12:00"),
            iv("13:00", "15:00"),
            iv("16:00", "22:00"),
        ]
    );
}

#[test]
fn busy_outside_window_is_ignored() {
    let busy = merge_intervals(&[iv("06:00", "07:00"), iv("22:30", "23:30")]);
    let free = derive_free_slots(&busy, &default_config());
    assert_eq!(free, vec![iv("08:00", "22:00")]);
}

#[test]
fn busy_touching_window_edges_from_outside_is_ignored() {
    let busy = merge_intervals(&[iv("07:00", "08:00"), iv("22:00", "23:00")]);
    let free = derive_free_slots(&busy, &default_config());
    assert_eq!(free, vec![iv("08:00", "22:00")]);
}

#[test]
fn busy_crossing_window_edges_is_clipped() {
    let busy = merge_intervals(&[iv("07:00", "09:00"), iv("21:00", "23:00")]);
    let free = derive_free_slots(&busy, &default_config());
    assert_eq!(free, vec![iv("09:00", "21:00")]);
}

#[test]
fn free_slots_never_leave_the_window() {
    let cfg = config("09:00", "17:00", 0);
    let busy = merge_intervals(&[iv("06:00", "10:00"), iv("12:00", "12:30"), iv("16:00", "20:00")]);
    for slot in derive_free_slots(&busy, &cfg) {
        assert!(slot.start() >= cfg.day_start());
        assert!(slot.end() <= cfg.day_end());
    }
}

// ── Threshold ──────────────────────────────────────────────────────────────

#[test]
fn slot_exactly_at_threshold_is_kept() {
    let cfg = config("09:00", "12:00", 60);
    let busy = vec![iv("10:00", "11:00")];
    assert_eq!(
        derive_free_slots(&busy, &cfg),
        vec![iv("09:00", "10:00"), iv("11:00", "12:00")]
    );
}

#[test]
fn slot_one_minute_short_of_threshold_is_dropped() {
    let cfg = config("09:00", "12:00", 60);
    let busy = vec![iv("09:59", "11:00")];
    assert_eq!(derive_free_slots(&busy, &cfg), vec![iv("11:00", "12:00")]);
}

#[test]
fn zero_threshold_keeps_every_positive_gap() {
    let cfg = config("09:00", "12:00", 0);
    let busy = vec![iv("09:00", "09:59"), iv("10:00", "12:00")];
    assert_eq!(derive_free_slots(&busy, &cfg), vec![iv("09:59", "10:00")]);
}

#[test]
fn zero_width_gap_is_tolerated_and_filtered() {
    // Not produced by merge_intervals, but the deriver must not break on it.
    let busy = vec![iv("09:00", "10:00"), iv("10:00", "11:00")];
    let window = iv("09:00", "11:00");
    assert_eq!(candidate_gaps(&busy, &window), vec![iv("10:00", "10:00")]);

    let cfg = SlotConfig::new(window, 1, vec![Weekday::Mon]);
    assert!(derive_free_slots(&busy, &cfg).is_empty());
}

#[test]
fn zero_width_window_has_no_free_time_above_zero_threshold() {
    let cfg = config("12:00", "12:00", 1);
    assert!(derive_free_slots(&[], &cfg).is_empty());
}

// ── Convenience wrappers ───────────────────────────────────────────────────

#[test]
fn find_free_slots_merges_unsorted_input() {
    let busy = vec![iv("10:30", "12:00"), iv("09:00", "10:30"), iv("11:00", "11:30")];
    assert_eq!(
        find_free_slots(&busy, &default_config()),
        vec![iv("08:00", "09:00"), iv("12:00", "22:00")]
    );
}

#[test]
fn find_first_free_slot_skips_short_gaps() {
    // Gaps: 08:00-08:30 (30), 09:00-10:00 (60), 11:00-22:00
    let busy = vec![iv("08:30", "09:00"), iv("10:00", "11:00")];
    assert_eq!(
        find_first_free_slot(&busy, &default_config()),
        Some(iv("09:00", "10:00"))
    );
}

#[test]
fn find_first_free_slot_none_when_day_is_full() {
    let busy = vec![iv("07:00", "23:00")];
    assert_eq!(find_first_free_slot(&busy, &default_config()), None);
}
