// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Muscle-group distribution across a workout history

use super::volume::VolumeCalculator;
use crate::config::AnalyticsConfig;
use crate::models::{MuscleGroupShare, WorkoutRecord};
use std::collections::HashMap;

/// Distribution of exercises, sets, and volume across muscle groups
///
/// Each exercise occurrence contributes once to its group's exercise count;
/// set counts and volume include warmups. Percentages are integer-rounded
/// against the grand totals, and a zero grand total yields 0 for that metric
/// rather than a division by zero. Ordering is deterministic: exercise count
/// descending, ties broken by group name ascending.
pub fn compute_muscle_distribution(
    workouts: &[WorkoutRecord],
    volume: &VolumeCalculator,
    config: &AnalyticsConfig,
) -> Vec<MuscleGroupShare> {
    let mut groups: HashMap<String, (u32, u32, f64)> = HashMap::new();

    for workout in workouts {
        if !workout.is_completed() {
            continue;
        }
        for exercise in &workout.exercises {
            let group = config.resolve_muscle_group(
                &exercise.exercise_name,
                exercise.english_name.as_deref(),
                &exercise.muscle_group,
            );
            let exercise_volume: f64 = exercise
                .sets
                .iter()
                .map(|set| volume.set_volume(set, exercise))
                .sum();

            let entry = groups.entry(group).or_insert((0, 0, 0.0));
            entry.0 += 1;
            entry.1 += exercise.sets.len() as u32;
            entry.2 += exercise_volume;
        }
    }

    let total_exercises: u32 = groups.values().map(|(e, _, _)| e).sum();
    let total_sets: u32 = groups.values().map(|(_, s, _)| s).sum();
    let total_volume: f64 = groups.values().map(|(_, _, v)| v).sum();

    let mut shares: Vec<MuscleGroupShare> = groups
        .into_iter()
        .map(|(muscle_group, (exercise_count, set_count, group_volume))| MuscleGroupShare {
            muscle_group,
            exercise_count,
            set_count,
            volume: group_volume,
            exercise_pct: pct(f64::from(exercise_count), f64::from(total_exercises)),
            set_pct: pct(f64::from(set_count), f64::from(total_sets)),
            volume_pct: pct(group_volume, total_volume),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.exercise_count
            .cmp(&a.exercise_count)
            .then_with(|| a.muscle_group.cmp(&b.muscle_group))
    });

    shares
}

/// Integer-rounded percentage with a zero-denominator guard
fn pct(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        (part / total * 100.0).round()
    }
}
