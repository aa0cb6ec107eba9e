// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consecutive-day streak calculation over workout dates

use crate::models::StreakResult;
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

/// Compute current and longest streaks relative to the local calendar day
///
/// Input order does not matter and duplicate dates collapse to one
/// day-marker. Never fails: an empty input yields `{current: 0, longest: 0}`.
pub fn compute_streak(dates: &[NaiveDate]) -> StreakResult {
    compute_streak_at(dates, Local::now().date_naive())
}

/// Deterministic core of [`compute_streak`] with an explicit reference day
///
/// The current streak is anchored at `today`: if the most recent workout day
/// is today or yesterday it extends backward through gap-free days, otherwise
/// it is 0. The longest streak scans the whole history.
pub fn compute_streak_at(dates: &[NaiveDate], today: NaiveDate) -> StreakResult {
    // Dedup and order in one pass
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    if days.is_empty() {
        return StreakResult { current: 0, longest: 0 };
    }

    let mut current = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for day in days.iter().rev() {
        match previous {
            None => {
                if (today - *day).num_days() <= 1 {
                    current = 1;
                } else {
                    break;
                }
            }
            Some(prev) => {
                if (prev - *day).num_days() == 1 {
                    current += 1;
                } else {
                    break;
                }
            }
        }
        previous = Some(*day);
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for day in &days {
        run = match prev {
            Some(p) if (*day - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*day);
    }

    StreakResult { current, longest }
}
