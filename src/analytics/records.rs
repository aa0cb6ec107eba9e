// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Personal-record resolution per exercise
//!
//! Each record is the best of three independent maxima (heaviest weight,
//! highest reps, highest single-set volume) over working sets; the three may
//! come from three different sets on three different days. Ties go to the
//! most recent date.

use crate::models::{PersonalRecord, RecordEntry, WorkoutRecord};
use std::collections::BTreeSet;

/// Best-ever marks for one exercise across the whole snapshot
///
/// Warmup sets and sets missing weight or reps never qualify.
/// `total_workouts` ignores that filter: it counts every completed workout
/// the exercise appears in. An exercise absent from the history is not an
/// error; it yields a zero-value record.
pub fn compute_records(workouts: &[WorkoutRecord], exercise_id: &str) -> PersonalRecord {
    let mut record = PersonalRecord {
        exercise_id: exercise_id.to_string(),
        exercise_name: String::new(),
        muscle_group: String::new(),
        max_weight: None,
        max_reps: None,
        max_volume: None,
        total_workouts: 0,
    };

    for workout in workouts {
        if !workout.is_completed() {
            continue;
        }

        let mut appears = false;
        for exercise in &workout.exercises {
            if exercise.exercise_id != exercise_id {
                continue;
            }
            appears = true;
            if record.exercise_name.is_empty() {
                record.exercise_name = exercise.exercise_name.clone();
                record.muscle_group = exercise.muscle_group.clone();
            }

            for set in &exercise.sets {
                if set.is_warmup {
                    continue;
                }
                let (weight, reps) = match (set.weight, set.reps) {
                    (Some(weight), Some(reps)) => (weight, reps),
                    _ => continue,
                };

                challenge(&mut record.max_weight, weight, workout.workout_date);
                challenge(&mut record.max_reps, f64::from(reps), workout.workout_date);
                challenge(&mut record.max_volume, weight * f64::from(reps), workout.workout_date);
            }
        }

        if appears {
            record.total_workouts += 1;
        }
    }

    record
}

/// Records for every exercise in the snapshot
///
/// Ordered by workout appearances descending, then exercise name ascending,
/// matching the history view the records screen renders.
pub fn compute_all_records(workouts: &[WorkoutRecord]) -> Vec<PersonalRecord> {
    let mut exercise_ids: BTreeSet<&str> = BTreeSet::new();
    for workout in workouts.iter().filter(|w| w.is_completed()) {
        for exercise in &workout.exercises {
            exercise_ids.insert(exercise.exercise_id.as_str());
        }
    }

    let mut records: Vec<PersonalRecord> = exercise_ids
        .iter()
        .map(|id| compute_records(workouts, id))
        .collect();

    records.sort_by(|a, b| {
        b.total_workouts
            .cmp(&a.total_workouts)
            .then_with(|| a.exercise_name.cmp(&b.exercise_name))
    });

    records
}

/// Replace the incumbent when the challenger is strictly better, or equal
/// but more recent
fn challenge(incumbent: &mut Option<RecordEntry>, value: f64, date: chrono::NaiveDate) {
    let better = match incumbent {
        None => true,
        Some(current) => value > current.value || (value == current.value && date >= current.date),
    };
    if better {
        *incumbent = Some(RecordEntry { value, date });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseEntry, SetEntry};
    use chrono::{NaiveDate, Utc};

    fn set(weight: Option<f64>, reps: Option<u32>, is_warmup: bool) -> SetEntry {
        SetEntry { weight, reps, is_warmup }
    }

    fn workout(id: &str, date: NaiveDate, exercise_id: &str, sets: Vec<SetEntry>) -> WorkoutRecord {
        WorkoutRecord {
            workout_id: id.to_string(),
            user_id: "u-1".to_string(),
            workout_date: date,
            start_time: Utc::now(),
            end_time: Some(Utc::now()),
            total_duration_minutes: Some(60),
            exercises: vec![ExerciseEntry {
                exercise_id: exercise_id.to_string(),
                exercise_name: "벤치프레스".to_string(),
                english_name: Some("Bench Press".to_string()),
                muscle_group: "가슴".to_string(),
                equipment: Some("바벨".to_string()),
                sets,
            }],
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_three_maxima_are_independent() {
        let workouts = vec![
            // Heaviest set: 100kg x 3
            workout("w-1", date(1), "ex-bench", vec![set(Some(100.0), Some(3), false)]),
            // Most reps: 40kg x 20
            workout("w-2", date(2), "ex-bench", vec![set(Some(40.0), Some(20), false)]),
            // Highest volume: 90kg x 10 = 900
            workout("w-3", date(3), "ex-bench", vec![set(Some(90.0), Some(10), false)]),
        ];

        let record = compute_records(&workouts, "ex-bench");
        assert_eq!(record.max_weight.as_ref().unwrap().value, 100.0);
        assert_eq!(record.max_weight.as_ref().unwrap().date, date(1));
        assert_eq!(record.max_reps.as_ref().unwrap().value, 20.0);
        assert_eq!(record.max_reps.as_ref().unwrap().date, date(2));
        assert_eq!(record.max_volume.as_ref().unwrap().value, 900.0);
        assert_eq!(record.max_volume.as_ref().unwrap().date, date(3));
        assert_eq!(record.total_workouts, 3);
    }

    #[test]
    fn test_ties_go_to_the_most_recent_date() {
        let workouts = vec![
            workout("w-1", date(1), "ex-bench", vec![set(Some(100.0), Some(5), false)]),
            workout("w-2", date(8), "ex-bench", vec![set(Some(100.0), Some(5), false)]),
        ];

        let record = compute_records(&workouts, "ex-bench");
        assert_eq!(record.max_weight.as_ref().unwrap().date, date(8));
        assert_eq!(record.max_volume.as_ref().unwrap().date, date(8));
    }

    #[test]
    fn test_warmups_and_incomplete_sets_never_qualify() {
        let workouts = vec![workout(
            "w-1",
            date(5),
            "ex-bench",
            vec![
                set(Some(200.0), Some(1), true), // warmup, heaviest on paper
                set(None, Some(30), false),      // no weight
                set(Some(120.0), None, false),   // no reps
                set(Some(80.0), Some(8), false),
            ],
        )];

        let record = compute_records(&workouts, "ex-bench");
        assert_eq!(record.max_weight.as_ref().unwrap().value, 80.0);
        assert_eq!(record.max_reps.as_ref().unwrap().value, 8.0);
        assert_eq!(record.max_volume.as_ref().unwrap().value, 640.0);
    }

    #[test]
    fn test_warmup_only_history_still_counts_workouts() {
        let workouts = vec![workout(
            "w-1",
            date(5),
            "ex-bench",
            vec![set(Some(40.0), Some(10), true)],
        )];

        let record = compute_records(&workouts, "ex-bench");
        assert!(record.max_weight.is_none());
        assert!(record.max_reps.is_none());
        assert!(record.max_volume.is_none());
        assert_eq!(record.total_workouts, 1);
    }

    #[test]
    fn test_unknown_exercise_yields_zero_value_record() {
        let workouts = vec![workout(
            "w-1",
            date(5),
            "ex-bench",
            vec![set(Some(80.0), Some(8), false)],
        )];

        let record = compute_records(&workouts, "ex-nonexistent");
        assert_eq!(record.exercise_id, "ex-nonexistent");
        assert_eq!(record.total_workouts, 0);
        assert!(record.max_weight.is_none());
        assert!(record.max_reps.is_none());
        assert!(record.max_volume.is_none());
    }

    #[test]
    fn test_in_progress_workouts_are_excluded() {
        let mut in_progress = workout(
            "w-1",
            date(5),
            "ex-bench",
            vec![set(Some(150.0), Some(5), false)],
        );
        in_progress.end_time = None;
        let workouts = vec![
            in_progress,
            workout("w-2", date(6), "ex-bench", vec![set(Some(80.0), Some(8), false)]),
        ];

        let record = compute_records(&workouts, "ex-bench");
        assert_eq!(record.max_weight.as_ref().unwrap().value, 80.0);
        assert_eq!(record.total_workouts, 1);
    }

    #[test]
    fn test_all_records_ordering() {
        let mut squat_day = workout("w-3", date(3), "ex-squat", vec![set(Some(100.0), Some(5), false)]);
        squat_day.exercises[0].exercise_name = "스쿼트".to_string();
        let workouts = vec![
            workout("w-1", date(1), "ex-bench", vec![set(Some(80.0), Some(8), false)]),
            workout("w-2", date(2), "ex-bench", vec![set(Some(82.5), Some(8), false)]),
            squat_day,
        ];

        let records = compute_all_records(&workouts);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].exercise_id, "ex-bench");
        assert_eq!(records[0].total_workouts, 2);
        assert_eq!(records[1].exercise_id, "ex-squat");
    }
}
