// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Headline statistics and per-exercise progress series

use super::streaks::compute_streak_at;
use super::trends::classify_trend;
use crate::models::{ExerciseProgress, ExerciseProgressPoint, OverallStats, WorkoutRecord};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// Lifetime headline statistics for a history snapshot
pub fn compute_overall_stats(workouts: &[WorkoutRecord]) -> OverallStats {
    compute_overall_stats_at(workouts, Local::now().date_naive())
}

/// Deterministic core of [`compute_overall_stats`] with an explicit
/// reference day for the streak
///
/// Total volume here is the raw `weight * reps` sum over every set with both
/// values recorded, warmups included and no per-limb adjustment; it matches
/// the lifetime number the storage layer computes with a plain SQL SUM.
pub fn compute_overall_stats_at(workouts: &[WorkoutRecord], today: NaiveDate) -> OverallStats {
    let mut total_workouts = 0u32;
    let mut total_volume = 0.0f64;
    let mut duration_sum = 0u64;
    let mut duration_count = 0u32;
    let mut dates: Vec<NaiveDate> = Vec::new();

    for workout in workouts {
        if !workout.is_completed() {
            continue;
        }
        total_workouts += 1;
        dates.push(workout.workout_date);

        if let Some(duration) = workout.total_duration_minutes {
            duration_sum += u64::from(duration);
            duration_count += 1;
        }

        for exercise in &workout.exercises {
            for set in &exercise.sets {
                if let (Some(weight), Some(reps)) = (set.weight, set.reps) {
                    total_volume += weight * f64::from(reps);
                }
            }
        }
    }

    let average_duration_minutes = if duration_count == 0 {
        0
    } else {
        (duration_sum as f64 / f64::from(duration_count)).round() as u32
    };

    OverallStats {
        total_workouts,
        total_volume,
        average_duration_minutes,
        current_streak: compute_streak_at(&dates, today).current,
    }
}

/// Per-workout progress series for one exercise
///
/// One point per completed workout containing the exercise, date ascending,
/// aggregated over working (non-warmup) sets. The max-weight and volume
/// trends compare the last five workouts against the first five with the
/// historical ±5% threshold; fewer than two workouts is always stable.
pub fn compute_exercise_progress(workouts: &[WorkoutRecord], exercise_id: &str) -> ExerciseProgress {
    let mut exercise_name = String::new();
    let mut muscle_group = String::new();

    // Keyed by (date, workout id) so same-day sessions stay distinct points
    let mut per_workout: BTreeMap<(NaiveDate, &str), PointAccumulator> = BTreeMap::new();

    for workout in workouts {
        if !workout.is_completed() {
            continue;
        }
        for exercise in &workout.exercises {
            if exercise.exercise_id != exercise_id {
                continue;
            }
            if exercise_name.is_empty() {
                exercise_name = exercise.exercise_name.clone();
                muscle_group = exercise.muscle_group.clone();
            }

            let acc = per_workout
                .entry((workout.workout_date, workout.workout_id.as_str()))
                .or_default();
            for set in &exercise.sets {
                if set.is_warmup {
                    continue;
                }
                acc.total_sets += 1;
                if let Some(weight) = set.weight {
                    acc.max_weight = acc.max_weight.max(weight);
                }
                if let Some(reps) = set.reps {
                    acc.max_reps = acc.max_reps.max(reps);
                    acc.reps_sum += u64::from(reps);
                    acc.reps_count += 1;
                }
                if let (Some(weight), Some(reps)) = (set.weight, set.reps) {
                    acc.total_volume += weight * f64::from(reps);
                }
            }
        }
    }

    let points: Vec<ExerciseProgressPoint> = per_workout
        .into_iter()
        .map(|((date, _), acc)| ExerciseProgressPoint {
            date,
            max_weight: acc.max_weight,
            max_reps: acc.max_reps,
            total_sets: acc.total_sets,
            total_volume: acc.total_volume,
            avg_reps: if acc.reps_count == 0 {
                0
            } else {
                (acc.reps_sum as f64 / f64::from(acc.reps_count)).round() as u32
            },
        })
        .collect();

    let (max_weight_trend, volume_trend) = if points.len() < 2 {
        (classify_trend(&[], 0, 5.0), classify_trend(&[], 0, 5.0))
    } else {
        let window = 5.min(points.len());
        // Weight progress compares the best single lift of each window
        let older_max = window_max(&points[..window]);
        let recent_max = window_max(&points[points.len() - window..]);
        let volume_series: Vec<f64> = points.iter().map(|p| p.total_volume).collect();
        (
            classify_trend(&[older_max, recent_max], 1, 5.0),
            classify_trend(&volume_series, 5, 5.0),
        )
    };

    ExerciseProgress {
        exercise_id: exercise_id.to_string(),
        exercise_name,
        muscle_group,
        points,
        max_weight_trend,
        volume_trend,
    }
}

#[derive(Default)]
struct PointAccumulator {
    max_weight: f64,
    max_reps: u32,
    total_sets: u32,
    total_volume: f64,
    reps_sum: u64,
    reps_count: u32,
}

fn window_max(points: &[ExerciseProgressPoint]) -> f64 {
    points.iter().map(|p| p.max_weight).fold(0.0, f64::max)
}
