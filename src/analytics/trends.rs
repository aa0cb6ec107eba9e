// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trend classification over numeric series and the twelve-week trend report
//!
//! Different screens historically classify with different thresholds (±5% on
//! exercise progress, ±10% on weekly training trends), so the threshold is a
//! required parameter and never defaulted here.

use super::volume::VolumeCalculator;
use crate::models::{
    DayOfWeekCount, PopularExercise, Trend, TrendDirection, WeeklyTrendPoint, WeeklyTrendReport,
    WorkoutRecord,
};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Classify the direction of change between the two ends of a series
///
/// `recent` is the last `window_size` elements, `older` the first
/// `window_size`; on a series shorter than two windows the slices are taken
/// literally from each end and may overlap. The recent-window mean is
/// compared against the older-window mean: change above `threshold_pct` is
/// increasing, below `-threshold_pct` decreasing, otherwise stable. A zero
/// older mean reports a 0 change rather than a division by zero.
pub fn classify_trend(series: &[f64], window_size: usize, threshold_pct: f64) -> Trend {
    let window = window_size.min(series.len());
    if window == 0 {
        return Trend {
            direction: TrendDirection::Stable,
            change_pct: 0.0,
        };
    }

    let older_mean = mean(&series[..window]);
    let recent_mean = mean(&series[series.len() - window..]);

    let change_pct = if older_mean == 0.0 {
        0.0
    } else {
        (recent_mean - older_mean) / older_mean * 100.0
    };

    let direction = if change_pct > threshold_pct {
        TrendDirection::Increasing
    } else if change_pct < -threshold_pct {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    Trend { direction, change_pct }
}

/// Twelve-week training trend report
///
/// Weeks start on Monday here, unlike the Sunday-start 90-day frequency
/// series; the two conventions shipped side by side and both are kept.
/// Overall trends compare the last four weeks against the first four with
/// the historical ±10% threshold.
pub fn compute_weekly_trend_report(
    workouts: &[WorkoutRecord],
    volume: &VolumeCalculator,
    today: NaiveDate,
) -> WeeklyTrendReport {
    // Twelve trailing weeks
    const REPORT_WINDOW_DAYS: i64 = 84;
    let window_start = today - Duration::days(REPORT_WINDOW_DAYS);

    let mut weeks: BTreeMap<NaiveDate, WeekAccumulator> = BTreeMap::new();
    let mut day_counts: [u32; 7] = [0; 7];
    let mut appearances: HashMap<(&str, &str), u32> = HashMap::new();

    for workout in workouts {
        if !workout.is_completed() || workout.workout_date < window_start {
            continue;
        }

        let date = workout.workout_date;
        let week_start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        let acc = weeks.entry(week_start).or_default();
        acc.workout_count += 1;
        acc.total_duration_minutes += workout.total_duration_minutes.unwrap_or(0);
        acc.total_volume += volume.workout_volume(workout);
        acc.total_sets += workout
            .exercises
            .iter()
            .map(|e| e.sets.len() as u32)
            .sum::<u32>();

        day_counts[date.weekday().num_days_from_sunday() as usize] += 1;

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for exercise in &workout.exercises {
            acc.exercise_ids.insert(exercise.exercise_id.clone());
            if seen.insert(exercise.exercise_id.as_str()) {
                *appearances
                    .entry((exercise.exercise_id.as_str(), exercise.exercise_name.as_str()))
                    .or_insert(0) += 1;
            }
        }
    }

    let weekly: Vec<WeeklyTrendPoint> = weeks
        .into_iter()
        .map(|(week_start, acc)| WeeklyTrendPoint {
            week_start,
            workout_count: acc.workout_count,
            total_duration_minutes: acc.total_duration_minutes,
            total_volume: acc.total_volume,
            avg_sets_per_workout: if acc.workout_count == 0 {
                0
            } else {
                (f64::from(acc.total_sets) / f64::from(acc.workout_count)).round() as u32
            },
            unique_exercises: acc.exercise_ids.len() as u32,
        })
        .collect();

    const DAY_NAMES: [&str; 7] = [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ];
    let mut day_frequency: Vec<DayOfWeekCount> = DAY_NAMES
        .iter()
        .zip(day_counts.iter())
        .filter(|(_, count)| **count > 0)
        .map(|(day, count)| DayOfWeekCount {
            day: (*day).to_string(),
            workout_count: *count,
        })
        .collect();
    day_frequency.sort_by(|a, b| b.workout_count.cmp(&a.workout_count).then_with(|| a.day.cmp(&b.day)));

    let mut popular_exercises: Vec<PopularExercise> = appearances
        .into_iter()
        .map(|((id, name), usage_count)| PopularExercise {
            exercise_id: id.to_string(),
            exercise_name: name.to_string(),
            usage_count,
        })
        .collect();
    popular_exercises.sort_by(|a, b| {
        b.usage_count
            .cmp(&a.usage_count)
            .then_with(|| a.exercise_name.cmp(&b.exercise_name))
    });
    popular_exercises.truncate(10);

    let frequency_series: Vec<f64> = weekly.iter().map(|w| f64::from(w.workout_count)).collect();
    let volume_series: Vec<f64> = weekly.iter().map(|w| w.total_volume).collect();
    let duration_series: Vec<f64> = weekly
        .iter()
        .map(|w| f64::from(w.total_duration_minutes))
        .collect();

    WeeklyTrendReport {
        weekly,
        day_frequency,
        popular_exercises,
        frequency_trend: classify_trend(&frequency_series, 4, 10.0),
        volume_trend: classify_trend(&volume_series, 4, 10.0),
        duration_trend: classify_trend(&duration_series, 4, 10.0),
    }
}

#[derive(Default)]
struct WeekAccumulator {
    workout_count: u32,
    total_duration_minutes: u32,
    total_volume: f64,
    total_sets: u32,
    exercise_ids: BTreeSet<String>,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
