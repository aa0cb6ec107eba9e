// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Training volume calculation with the per-limb doubling rule

use crate::config::AnalyticsConfig;
use crate::models::{ExerciseEntry, SetEntry, WorkoutRecord};
use serde::{Deserialize, Serialize};

/// Why a set's volume was doubled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeAdjustment {
    /// Per-limb equipment (dumbbell or kettlebell): both limbs lift the stated weight
    PerLimbEquipment,
    /// Single-limb movement (lunge, one-arm row, ...)
    UnilateralMovement,
    /// Both conditions hold; volume is still only doubled once
    Both,
}

/// Computes per-set and per-workout training volume
///
/// Base volume is `weight * reps`. Sets missing either value contribute 0.
/// Dumbbell/kettlebell and unilateral movements are doubled because the
/// logged weight is lifted by each limb independently; the decision is an
/// explicit keyword lookup from [`AnalyticsConfig`], never inferred from the
/// weight itself. All methods are pure.
#[derive(Debug, Clone)]
pub struct VolumeCalculator {
    per_limb_equipment_keywords: Vec<String>,
    unilateral_keywords: Vec<String>,
}

impl VolumeCalculator {
    pub fn new(config: &AnalyticsConfig) -> Self {
        let mut per_limb_equipment_keywords: Vec<String> = config
            .volume
            .dumbbell_keywords
            .iter()
            .chain(config.volume.kettlebell_keywords.iter())
            .map(|k| k.to_lowercase())
            .collect();
        per_limb_equipment_keywords.dedup();

        Self {
            per_limb_equipment_keywords,
            unilateral_keywords: config
                .volume
                .unilateral_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// Volume of a single set within its exercise, adjustment applied
    pub fn set_volume(&self, set: &SetEntry, exercise: &ExerciseEntry) -> f64 {
        let (weight, reps) = match (set.weight, set.reps) {
            (Some(weight), Some(reps)) => (weight, reps),
            _ => return 0.0,
        };

        weight * f64::from(reps) * self.multiplier(exercise)
    }

    /// Total volume of a workout: every set of every exercise, warmups included
    pub fn workout_volume(&self, workout: &WorkoutRecord) -> f64 {
        workout
            .exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter().map(move |set| self.set_volume(set, exercise)))
            .sum()
    }

    /// The adjustment applied to an exercise's sets, if any
    pub fn adjustment(&self, exercise: &ExerciseEntry) -> Option<VolumeAdjustment> {
        let per_limb = self.uses_per_limb_equipment(exercise);
        let unilateral = self.is_unilateral(exercise);

        match (per_limb, unilateral) {
            (true, true) => Some(VolumeAdjustment::Both),
            (true, false) => Some(VolumeAdjustment::PerLimbEquipment),
            (false, true) => Some(VolumeAdjustment::UnilateralMovement),
            (false, false) => None,
        }
    }

    fn multiplier(&self, exercise: &ExerciseEntry) -> f64 {
        // Never doubled twice when both conditions hold
        if self.adjustment(exercise).is_some() {
            2.0
        } else {
            1.0
        }
    }

    fn uses_per_limb_equipment(&self, exercise: &ExerciseEntry) -> bool {
        let equipment = match exercise.equipment.as_deref() {
            Some(equipment) => equipment.to_lowercase(),
            None => return false,
        };

        self.per_limb_equipment_keywords
            .iter()
            .any(|keyword| equipment.contains(keyword))
    }

    fn is_unilateral(&self, exercise: &ExerciseEntry) -> bool {
        let name = exercise.exercise_name.to_lowercase();
        let english = exercise
            .english_name
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        self.unilateral_keywords
            .iter()
            .any(|keyword| name.contains(keyword) || english.contains(keyword))
    }
}
