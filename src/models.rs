// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for the workout analytics engine. The input side is a
//! normalized snapshot of a user's strength-training history (workouts with
//! nested exercises and sets); the output side is the set of immutable value
//! objects the aggregators produce.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: The same records describe rows fetched from a
//!   relational store and entries replayed from a local history cache
//! - **Read Only**: Aggregation never mutates a record; every result is
//!   allocated fresh per call
//! - **Serializable**: All models support JSON serialization so results can
//!   cross an API boundary unchanged
//!
//! ## Core Models
//!
//! - [`WorkoutRecord`]: One logged workout session with its exercises
//! - [`ExerciseEntry`]: One exercise performed within a workout
//! - [`SetEntry`]: A single set (weight, reps, warmup flag)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single completed or in-progress workout session
///
/// Records with `end_time == None` are in-progress sessions and are excluded
/// from every aggregation. `workout_date` carries local calendar-day
/// semantics: day boundaries drive streaks and daily bucketing.
///
/// # Examples
///
/// ```rust
/// use workout_analytics::models::{WorkoutRecord, ExerciseEntry, SetEntry};
/// use chrono::{NaiveDate, Utc};
///
/// let workout = WorkoutRecord {
///     workout_id: "w-1".to_string(),
///     user_id: "u-1".to_string(),
///     workout_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     start_time: Utc::now(),
///     end_time: Some(Utc::now()),
///     total_duration_minutes: Some(55),
///     exercises: vec![ExerciseEntry {
///         exercise_id: "ex-bench".to_string(),
///         exercise_name: "벤치프레스".to_string(),
///         english_name: Some("Bench Press".to_string()),
///         muscle_group: "가슴".to_string(),
///         equipment: Some("바벨".to_string()),
///         sets: vec![SetEntry { weight: Some(80.0), reps: Some(5), is_warmup: false }],
///     }],
/// };
/// assert!(workout.is_completed());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Opaque workout identifier
    pub workout_id: String,
    /// Opaque owner identifier; history snapshots are always single-user
    pub user_id: String,
    /// Calendar date the workout occurred (timezone-naive, local semantics)
    pub workout_date: NaiveDate,
    /// When the session was started
    pub start_time: DateTime<Utc>,
    /// When the session was finished; `None` means still in progress
    pub end_time: Option<DateTime<Utc>>,
    /// Total session duration in minutes, if recorded
    pub total_duration_minutes: Option<u32>,
    /// Exercises performed, in session order
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutRecord {
    /// Whether this session was finished and therefore counts for aggregation
    pub fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }
}

/// One exercise performed within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Opaque exercise identifier (stable across workouts)
    pub exercise_id: String,
    /// Display name, usually Korean ("덤벨 컬")
    pub exercise_name: String,
    /// English name, when the catalog provides one ("Dumbbell Curl")
    pub english_name: Option<String>,
    /// Primary muscle group; may be empty for user-created exercises
    pub muscle_group: String,
    /// Equipment label ("덤벨", "바벨", "케틀벨", ...), drives volume adjustment
    pub equipment: Option<String>,
    /// Sets performed, in order
    pub sets: Vec<SetEntry>,
}

/// A single set within an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
    /// Weight lifted in kilograms; bodyweight or timed sets log `None`
    pub weight: Option<f64>,
    /// Repetitions performed
    pub reps: Option<u32>,
    /// Warmup sets are excluded from personal records and progress trends
    pub is_warmup: bool,
}

/// Consecutive-day workout streaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Length of the run ending today or yesterday; 0 if the last workout is older
    pub current: u32,
    /// Longest run of consecutive workout days anywhere in history
    pub longest: u32,
}

/// One aggregation unit in a frequency series (a day, week, or month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBucket {
    /// Bucket label: `YYYY-MM-DD` for days and week starts, `YYYY-MM` for months
    pub label: String,
    /// Completed workouts in the bucket
    pub count: u32,
    /// Total adjusted training volume in the bucket (kg)
    pub volume: f64,
}

/// Workout frequency over a trailing period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Requested period length in days (7, 30, 90, or 365)
    pub period_days: u32,
    /// Completed workouts inside the period
    pub total_workouts: u32,
    /// Distinct calendar days with at least one workout
    pub days_with_workouts: u32,
    /// `total_workouts / period_days * 7`, rounded to one decimal
    pub average_per_week: f64,
    /// Time-ascending series; dense for daily periods, sparse otherwise
    pub buckets: Vec<FrequencyBucket>,
}

/// Share of training attributed to one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupShare {
    /// Primary muscle group label
    pub muscle_group: String,
    /// Exercise occurrences (each appearance in a workout counts once)
    pub exercise_count: u32,
    /// Total sets, warmups included
    pub set_count: u32,
    /// Total adjusted volume, warmups included (kg)
    pub volume: f64,
    /// Percent of all exercise occurrences, rounded to the nearest integer
    pub exercise_pct: f64,
    /// Percent of all sets, rounded to the nearest integer
    pub set_pct: f64,
    /// Percent of all volume, rounded to the nearest integer
    pub volume_pct: f64,
}

/// A best-ever value together with the date it was achieved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub value: f64,
    pub date: NaiveDate,
}

/// Best-ever marks for one exercise
///
/// The three maxima are independent: the heaviest set, the highest-rep set,
/// and the highest-volume set may all be different sets from different days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle_group: String,
    /// Heaviest working-set weight (kg); `None` when no qualifying set exists
    pub max_weight: Option<RecordEntry>,
    /// Highest working-set rep count
    pub max_reps: Option<RecordEntry>,
    /// Highest single-set volume (`weight * reps`, kg)
    pub max_volume: Option<RecordEntry>,
    /// Completed workouts in which this exercise appears (warmup-only included)
    pub total_workouts: u32,
}

/// Direction of change between an older and a more recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Classified trend with the raw percentage change behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Percentage change of the recent-window mean over the older-window mean
    pub change_pct: f64,
}

/// Headline lifetime statistics for a user's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    /// Completed workouts across the whole snapshot
    pub total_workouts: u32,
    /// Lifetime raw volume: `weight * reps` over every set with both recorded
    pub total_volume: f64,
    /// Mean session duration, rounded to the nearest minute
    pub average_duration_minutes: u32,
    /// Current consecutive-day streak
    pub current_streak: u32,
}

/// One workout's contribution to an exercise progress series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgressPoint {
    pub date: NaiveDate,
    /// Heaviest working set that day (0 when no weighted working set exists)
    pub max_weight: f64,
    /// Highest working-set rep count that day
    pub max_reps: u32,
    /// Working sets performed
    pub total_sets: u32,
    /// Raw working-set volume (`weight * reps`)
    pub total_volume: f64,
    /// Mean working-set reps, rounded to the nearest integer
    pub avg_reps: u32,
}

/// Per-workout progress history for one exercise, with trend classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseProgress {
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle_group: String,
    /// Date-ascending, one point per workout containing the exercise
    pub points: Vec<ExerciseProgressPoint>,
    pub max_weight_trend: Trend,
    pub volume_trend: Trend,
}

/// Aggregates for one training week (Monday start)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    pub week_start: NaiveDate,
    pub workout_count: u32,
    pub total_duration_minutes: u32,
    pub total_volume: f64,
    /// Mean sets per workout that week, rounded
    pub avg_sets_per_workout: u32,
    /// Distinct exercises trained that week
    pub unique_exercises: u32,
}

/// Workout count for one day of the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfWeekCount {
    /// English day name ("Sunday" .. "Saturday")
    pub day: String,
    pub workout_count: u32,
}

/// An exercise ranked by how many workouts it appeared in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularExercise {
    pub exercise_id: String,
    pub exercise_name: String,
    pub usage_count: u32,
}

/// Twelve-week training trend report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTrendReport {
    /// Week-ascending aggregates; only weeks containing workouts appear
    pub weekly: Vec<WeeklyTrendPoint>,
    /// Day-of-week counts, busiest day first
    pub day_frequency: Vec<DayOfWeekCount>,
    /// Top exercises by workout appearances, at most ten
    pub popular_exercises: Vec<PopularExercise>,
    pub frequency_trend: Trend,
    pub volume_trend: Trend,
    pub duration_trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TrendDirection::Increasing).unwrap(),
            "\"increasing\""
        );
        assert_eq!(
            serde_json::to_string(&TrendDirection::Stable).unwrap(),
            "\"stable\""
        );

        let parsed: TrendDirection = serde_json::from_str("\"decreasing\"").unwrap();
        assert_eq!(parsed, TrendDirection::Decreasing);
    }

    #[test]
    fn test_workout_record_json_round_trip() {
        let workout = WorkoutRecord {
            workout_id: "w-1".to_string(),
            user_id: "u-1".to_string(),
            workout_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            start_time: Utc::now(),
            end_time: None,
            total_duration_minutes: None,
            exercises: vec![ExerciseEntry {
                exercise_id: "ex-bench".to_string(),
                exercise_name: "벤치프레스".to_string(),
                english_name: None,
                muscle_group: "가슴".to_string(),
                equipment: Some("바벨".to_string()),
                sets: vec![SetEntry {
                    weight: Some(80.0),
                    reps: Some(5),
                    is_warmup: false,
                }],
            }],
        };

        let json = serde_json::to_string(&workout).unwrap();
        let back: WorkoutRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.workout_id, "w-1");
        assert_eq!(back.workout_date, workout.workout_date);
        assert!(!back.is_completed());
        assert_eq!(back.exercises[0].exercise_name, "벤치프레스");
        assert_eq!(back.exercises[0].sets[0].weight, Some(80.0));
    }

    #[test]
    fn test_result_models_survive_api_boundary() {
        let summary = FrequencySummary {
            period_days: 7,
            total_workouts: 3,
            days_with_workouts: 2,
            average_per_week: 3.0,
            buckets: vec![FrequencyBucket {
                label: "2025-06-15".to_string(),
                count: 2,
                volume: 800.0,
            }],
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: FrequencySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.average_per_week, 3.0);
        assert_eq!(back.buckets, summary.buckets);

        let record = PersonalRecord {
            exercise_id: "ex-squat".to_string(),
            exercise_name: "스쿼트".to_string(),
            muscle_group: "하체".to_string(),
            max_weight: Some(RecordEntry {
                value: 100.0,
                date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            }),
            max_reps: None,
            max_volume: None,
            total_workouts: 8,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: PersonalRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_weight, record.max_weight);
        assert!(back.max_reps.is_none());
    }
}
