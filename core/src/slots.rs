// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure slot arithmetic: generating the candidate grid for a window and
//! subtracting booked times.

use std::collections::HashSet;

use jiff::civil::{Time, time};

use crate::datetime::format_clock;

/// Default spacing between bookable slot starts, in minutes.
pub const DEFAULT_SLOT_INTERVAL_MINUTES: u32 = 15;

/// Ordered slot start times in `[start, end)`, stepping by
/// `interval_minutes`.
///
/// Empty when `start >= end` or the interval is zero. An interval that
/// does not evenly divide the window stops before `end`; there is no
/// partial trailing slot.
pub fn slot_starts(start: Time, end: Time, interval_minutes: u32) -> Vec<Time> {
    if interval_minutes == 0 {
        return Vec::new();
    }

    let end_minute = minute_of_day(end);
    let mut cursor = minute_of_day(start);
    let mut starts = Vec::new();
    while cursor < end_minute {
        // cursor < end_minute <= 24 * 60, so hour and minute are in range
        starts.push(time((cursor / 60) as i8, (cursor % 60) as i8, 0, 0));
        cursor += i64::from(interval_minutes);
    }
    starts
}

/// Candidates minus the slots whose canonical `HH:mm` label appears in
/// `booked`, preserving order.
///
/// Membership is on the stored text: a row whose time is not canonical
/// `HH:mm` never filters anything.
pub fn without_booked(candidates: Vec<Time>, booked: &HashSet<String>) -> Vec<Time> {
    candidates
        .into_iter()
        .filter(|slot| !booked.contains(&format_clock(*slot)))
        .collect()
}

fn minute_of_day(t: Time) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}
