// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout frequency bucketing over a trailing period
//!
//! The bucketing strategy depends on the period, not a single uniform rule:
//! 7- and 30-day periods produce a dense per-day series with zero-filled
//! buckets, the 90-day period produces sparse Sunday-start weekly buckets,
//! and the 365-day period produces sparse `YYYY-MM` monthly buckets.

use super::volume::VolumeCalculator;
use super::AnalyticsError;
use crate::models::{FrequencyBucket, FrequencySummary, WorkoutRecord};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeMap;

/// The only accepted trailing periods, in days
pub const VALID_PERIODS: [u32; 4] = [7, 30, 90, 365];

/// Bucket completed workouts over the trailing `period_days`
///
/// Rejects any period outside [`VALID_PERIODS`] with
/// [`AnalyticsError::InvalidPeriod`]; the value is never coerced.
pub fn compute_frequency(
    workouts: &[WorkoutRecord],
    volume: &VolumeCalculator,
    period_days: u32,
) -> Result<FrequencySummary, AnalyticsError> {
    compute_frequency_at(workouts, volume, period_days, Local::now().date_naive())
}

/// Deterministic core of [`compute_frequency`] with an explicit reference day
pub fn compute_frequency_at(
    workouts: &[WorkoutRecord],
    volume: &VolumeCalculator,
    period_days: u32,
    today: NaiveDate,
) -> Result<FrequencySummary, AnalyticsError> {
    if !VALID_PERIODS.contains(&period_days) {
        tracing::debug!(period_days, "rejecting frequency request with invalid period");
        return Err(AnalyticsError::InvalidPeriod(period_days));
    }

    let window_start = today - Duration::days(i64::from(period_days));

    // Collapse the window to per-day counts and volumes
    let mut per_day: BTreeMap<NaiveDate, (u32, f64)> = BTreeMap::new();
    let mut total_workouts = 0u32;
    for workout in workouts {
        if !workout.is_completed() || workout.workout_date < window_start {
            continue;
        }
        total_workouts += 1;
        let entry = per_day.entry(workout.workout_date).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += volume.workout_volume(workout);
    }

    let buckets = match period_days {
        7 | 30 => daily_buckets(&per_day, period_days, today),
        90 => weekly_buckets(&per_day),
        _ => monthly_buckets(&per_day),
    };

    let average_per_week = if total_workouts == 0 {
        0.0
    } else {
        // Rounded to one decimal here, at the caller boundary, never per bucket
        round1(f64::from(total_workouts) / f64::from(period_days) * 7.0)
    };

    Ok(FrequencySummary {
        period_days,
        total_workouts,
        days_with_workouts: per_day.len() as u32,
        average_per_week,
        buckets,
    })
}

/// Dense series: exactly `period_days` buckets ending today, zero-filled
fn daily_buckets(
    per_day: &BTreeMap<NaiveDate, (u32, f64)>,
    period_days: u32,
    today: NaiveDate,
) -> Vec<FrequencyBucket> {
    (0..i64::from(period_days))
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let (count, volume) = per_day.get(&date).copied().unwrap_or((0, 0.0));
            FrequencyBucket {
                label: date.format("%Y-%m-%d").to_string(),
                count,
                volume,
            }
        })
        .collect()
}

/// Sparse weekly series keyed by Sunday week start, ascending
fn weekly_buckets(per_day: &BTreeMap<NaiveDate, (u32, f64)>) -> Vec<FrequencyBucket> {
    let mut per_week: BTreeMap<NaiveDate, (u32, f64)> = BTreeMap::new();
    for (date, (count, volume)) in per_day {
        let week_start = *date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
        let entry = per_week.entry(week_start).or_insert((0, 0.0));
        entry.0 += count;
        entry.1 += volume;
    }

    per_week
        .into_iter()
        .map(|(week_start, (count, volume))| FrequencyBucket {
            label: week_start.format("%Y-%m-%d").to_string(),
            count,
            volume,
        })
        .collect()
}

/// Sparse monthly series keyed by `YYYY-MM`, ascending
fn monthly_buckets(per_day: &BTreeMap<NaiveDate, (u32, f64)>) -> Vec<FrequencyBucket> {
    let mut per_month: BTreeMap<String, (u32, f64)> = BTreeMap::new();
    for (date, (count, volume)) in per_day {
        let label = format!("{:04}-{:02}", date.year(), date.month());
        let entry = per_month.entry(label).or_insert((0, 0.0));
        entry.0 += count;
        entry.1 += volume;
    }

    per_month
        .into_iter()
        .map(|(label, (count, volume))| FrequencyBucket { label, count, volume })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
