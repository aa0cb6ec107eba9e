// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end aggregation over a synthetic multi-week history

use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use workout_analytics::analytics::{
    compute_frequency_at, compute_muscle_distribution, compute_overall_stats_at,
    compute_streak_at, VolumeCalculator,
};
use workout_analytics::config::AnalyticsConfig;
use workout_analytics::models::{ExerciseEntry, SetEntry, TrendDirection, WorkoutRecord};
use workout_analytics::providers::InMemoryHistory;
use workout_analytics::service::AnalyticsService;

fn working_set(weight: f64, reps: u32) -> SetEntry {
    SetEntry {
        weight: Some(weight),
        reps: Some(reps),
        is_warmup: false,
    }
}

fn warmup_set(weight: f64, reps: u32) -> SetEntry {
    SetEntry {
        weight: Some(weight),
        reps: Some(reps),
        is_warmup: true,
    }
}

fn exercise(id: &str, name: &str, english: &str, group: &str, equipment: &str, sets: Vec<SetEntry>) -> ExerciseEntry {
    ExerciseEntry {
        exercise_id: id.to_string(),
        exercise_name: name.to_string(),
        english_name: Some(english.to_string()),
        muscle_group: group.to_string(),
        equipment: Some(equipment.to_string()),
        sets,
    }
}

fn workout(id: &str, user: &str, date: NaiveDate, duration: u32, exercises: Vec<ExerciseEntry>) -> WorkoutRecord {
    let start = Utc.from_utc_datetime(&date.and_hms_opt(18, 0, 0).unwrap());
    WorkoutRecord {
        workout_id: id.to_string(),
        user_id: user.to_string(),
        workout_date: date,
        start_time: start,
        end_time: Some(start + Duration::minutes(i64::from(duration))),
        total_duration_minutes: Some(duration),
        exercises,
    }
}

/// Eight weeks of history for one user: bench and dumbbell curls twice a
/// week with climbing weights, squats once a week, plus another user's
/// workout that must never leak into the results.
fn seed_history(today: NaiveDate) -> Vec<WorkoutRecord> {
    let mut records = Vec::new();

    for week in 0..8i64 {
        let bench_weight = 80.0 - f64::from(week as i32) * 2.5;
        let monday = today - Duration::days(week * 7 + 1);
        records.push(workout(
            &format!("w-push-{week}"),
            "u-1",
            monday,
            60,
            vec![
                exercise(
                    "ex-bench",
                    "벤치프레스",
                    "Bench Press",
                    "가슴",
                    "바벨",
                    vec![warmup_set(40.0, 10), working_set(bench_weight, 5), working_set(bench_weight, 5)],
                ),
                exercise(
                    "ex-db-curl",
                    "덤벨 컬",
                    "Dumbbell Curl",
                    "팔",
                    "덤벨",
                    vec![working_set(14.0, 10)],
                ),
            ],
        ));

        let thursday = today - Duration::days(week * 7 + 4);
        records.push(workout(
            &format!("w-legs-{week}"),
            "u-1",
            thursday,
            45,
            vec![exercise(
                "ex-squat",
                "스쿼트",
                "Squat",
                "하체",
                "바벨",
                vec![working_set(100.0, 5)],
            )],
        ));
    }

    // Someone else's training must not leak in
    records.push(workout(
        "w-other",
        "u-2",
        today,
        90,
        vec![exercise(
            "ex-dead",
            "데드리프트",
            "Deadlift",
            "등",
            "바벨",
            vec![working_set(180.0, 3)],
        )],
    ));

    records
}

fn service_over(records: Vec<WorkoutRecord>) -> AnalyticsService {
    AnalyticsService::new(
        Box::new(InMemoryHistory::new(records)),
        AnalyticsConfig::default(),
    )
}

#[tokio::test]
async fn test_overall_stats_scope_to_user() {
    let today = Local::now().date_naive();
    let service = service_over(seed_history(today));

    let stats = service.overall_stats("u-1").await.unwrap();
    assert_eq!(stats.total_workouts, 16);
    assert!(stats.total_volume > 0.0);
    // 8 x 60min + 8 x 45min
    assert_eq!(stats.average_duration_minutes, 53);

    let empty = service.overall_stats("u-3").await.unwrap();
    assert_eq!(empty.total_workouts, 0);
    assert_eq!(empty.total_volume, 0.0);
}

#[tokio::test]
async fn test_frequency_end_to_end() {
    let today = Local::now().date_naive();
    let service = service_over(seed_history(today));

    let weekly = service.workout_frequency("u-1", 7).await.unwrap();
    assert_eq!(weekly.buckets.len(), 7);
    assert_eq!(weekly.total_workouts, 2);

    // Weeks 0-3 contribute two workouts each, week 4's push day lands on
    // day 29 and still makes the window
    let monthly = service.workout_frequency("u-1", 30).await.unwrap();
    assert_eq!(monthly.buckets.len(), 30);
    assert_eq!(monthly.total_workouts, 9);
    // 9 / 30 * 7 = 2.1
    assert_eq!(monthly.average_per_week, 2.1);

    let invalid = service.workout_frequency("u-1", 10).await;
    assert!(invalid.is_err());
}

#[tokio::test]
async fn test_personal_records_end_to_end() {
    let today = Local::now().date_naive();
    let service = service_over(seed_history(today));

    let records = service.personal_records("u-1").await.unwrap();
    assert_eq!(records.len(), 3);
    // Bench and curls appear in 8 workouts each, squats in 8 as well;
    // ties order by name: 덤벨 컬 < 벤치프레스 < 스쿼트
    assert!(records.iter().all(|r| r.total_workouts == 8));
    assert_eq!(records[0].exercise_name, "덤벨 컬");

    let bench = service.exercise_records("u-1", "ex-bench").await.unwrap();
    // Heaviest bench was the most recent week at 80kg; the 10-rep warmup
    // never qualifies, so max reps stays at the working 5
    assert_eq!(bench.max_weight.as_ref().unwrap().value, 80.0);
    assert_eq!(bench.max_reps.as_ref().unwrap().value, 5.0);
    assert_eq!(bench.max_volume.as_ref().unwrap().value, 400.0);

    let unknown = service.exercise_records("u-1", "ex-nope").await.unwrap();
    assert_eq!(unknown.total_workouts, 0);
    assert!(unknown.max_weight.is_none());
}

#[tokio::test]
async fn test_exercise_progress_detects_climbing_bench() {
    let today = Local::now().date_naive();
    let service = service_over(seed_history(today));

    let progress = service.exercise_progress("u-1", "ex-bench").await.unwrap();
    assert_eq!(progress.points.len(), 8);
    assert!(progress.points.windows(2).all(|w| w[0].date < w[1].date));
    // 62.5kg in the oldest week climbing to 80kg in the newest
    assert_eq!(progress.points[0].max_weight, 62.5);
    assert_eq!(progress.points[7].max_weight, 80.0);
    assert_eq!(progress.max_weight_trend.direction, TrendDirection::Increasing);
    assert_eq!(progress.volume_trend.direction, TrendDirection::Increasing);
}

#[tokio::test]
async fn test_muscle_distribution_end_to_end() {
    let today = Local::now().date_naive();
    let service = service_over(seed_history(today));

    let shares = service.muscle_distribution("u-1").await.unwrap();
    assert_eq!(shares.len(), 3);

    // 가슴 and 팔 tie at 8 occurrences; name ascending breaks the tie
    assert_eq!(shares[0].muscle_group, "가슴");
    assert_eq!(shares[1].muscle_group, "팔");
    assert_eq!(shares[2].muscle_group, "하체");

    let pct_sum: f64 = shares.iter().map(|s| s.exercise_pct).sum();
    assert!((pct_sum - 100.0).abs() <= 1.0);

    // Dumbbell curls are doubled: 14kg x 10 x 2 x 8 weeks
    let arms = shares.iter().find(|s| s.muscle_group == "팔").unwrap();
    assert_eq!(arms.volume, 2240.0);
}

#[tokio::test]
async fn test_weekly_trend_report_end_to_end() {
    let today = Local::now().date_naive();
    let service = service_over(seed_history(today));

    let report = service.weekly_trends("u-1").await.unwrap();
    assert!(!report.weekly.is_empty());
    assert!(report.weekly.windows(2).all(|w| w[0].week_start < w[1].week_start));
    assert_eq!(report.popular_exercises[0].usage_count, 8);
    // Two sessions a week throughout: frequency holds stable
    assert_eq!(report.frequency_trend.direction, TrendDirection::Stable);
}

#[test]
fn test_pure_engine_agrees_with_service_inputs() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let records: Vec<WorkoutRecord> = seed_history(today)
        .into_iter()
        .filter(|r| r.user_id == "u-1")
        .collect();
    let config = AnalyticsConfig::default();
    let volume = VolumeCalculator::new(&config);

    // Streak: every workout lands 1 or 4 days into its week, so the current
    // streak is 1 (yesterday's push day)
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.workout_date).collect();
    let streak = compute_streak_at(&dates, today);
    assert_eq!(streak.current, 1);
    assert_eq!(streak.longest, 1);

    let stats = compute_overall_stats_at(&records, today);
    assert_eq!(stats.current_streak, 1);

    // Same snapshot, same result: aggregators hold no state
    let first = compute_frequency_at(&records, &volume, 90, today).unwrap();
    let second = compute_frequency_at(&records, &volume, 90, today).unwrap();
    assert_eq!(first.buckets, second.buckets);

    let shares_a = compute_muscle_distribution(&records, &volume, &config);
    let shares_b = compute_muscle_distribution(&records, &volume, &config);
    assert_eq!(shares_a, shares_b);
}
