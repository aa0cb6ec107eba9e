// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Analytics service: fetches a history snapshot through the injected
//! provider and runs the pure engine over it
//!
//! This is the only place the engine meets storage. Each method fetches one
//! immutable snapshot, computes, and returns a fresh result; nothing is
//! cached between calls.

use crate::analytics::{
    compute_all_records, compute_exercise_progress, compute_frequency, compute_muscle_distribution,
    compute_overall_stats, compute_records, compute_weekly_trend_report, AnalyticsError,
    VolumeCalculator, VALID_PERIODS,
};
use crate::config::AnalyticsConfig;
use crate::models::{
    ExerciseProgress, FrequencySummary, MuscleGroupShare, OverallStats, PersonalRecord,
    WeeklyTrendReport, WorkoutRecord,
};
use crate::providers::WorkoutHistoryProvider;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

/// User-scoped analytics over an injected history provider
pub struct AnalyticsService {
    provider: Box<dyn WorkoutHistoryProvider>,
    config: AnalyticsConfig,
    volume: VolumeCalculator,
}

impl AnalyticsService {
    pub fn new(provider: Box<dyn WorkoutHistoryProvider>, config: AnalyticsConfig) -> Self {
        let volume = VolumeCalculator::new(&config);
        Self {
            provider,
            config,
            volume,
        }
    }

    /// The volume calculator configured for this service
    pub fn volume_calculator(&self) -> &VolumeCalculator {
        &self.volume
    }

    /// Lifetime headline statistics
    pub async fn overall_stats(&self, user_id: &str) -> Result<OverallStats> {
        let snapshot = self.snapshot(user_id, None).await?;
        Ok(compute_overall_stats(&snapshot))
    }

    /// Frequency series over the trailing period (7, 30, 90, or 365 days)
    pub async fn workout_frequency(&self, user_id: &str, period_days: u32) -> Result<FrequencySummary> {
        // Reject before touching storage; the period is never coerced
        if !VALID_PERIODS.contains(&period_days) {
            return Err(AnalyticsError::InvalidPeriod(period_days).into());
        }
        let today = Local::now().date_naive();
        let since = today - Duration::days(i64::from(period_days));
        let snapshot = self.snapshot(user_id, Some(since)).await?;
        Ok(compute_frequency(&snapshot, &self.volume, period_days)?)
    }

    /// Muscle-group distribution across the whole history
    pub async fn muscle_distribution(&self, user_id: &str) -> Result<Vec<MuscleGroupShare>> {
        let snapshot = self.snapshot(user_id, None).await?;
        Ok(compute_muscle_distribution(&snapshot, &self.volume, &self.config))
    }

    /// Personal records for every exercise in the history
    pub async fn personal_records(&self, user_id: &str) -> Result<Vec<PersonalRecord>> {
        let snapshot = self.snapshot(user_id, None).await?;
        Ok(compute_all_records(&snapshot))
    }

    /// Personal record for a single exercise
    pub async fn exercise_records(&self, user_id: &str, exercise_id: &str) -> Result<PersonalRecord> {
        let snapshot = self.snapshot(user_id, None).await?;
        Ok(compute_records(&snapshot, exercise_id))
    }

    /// Per-workout progress series for a single exercise
    pub async fn exercise_progress(&self, user_id: &str, exercise_id: &str) -> Result<ExerciseProgress> {
        let snapshot = self.snapshot(user_id, None).await?;
        Ok(compute_exercise_progress(&snapshot, exercise_id))
    }

    /// Twelve-week training trend report
    pub async fn weekly_trends(&self, user_id: &str) -> Result<WeeklyTrendReport> {
        let today = Local::now().date_naive();
        let snapshot = self.snapshot(user_id, Some(today - Duration::days(84))).await?;
        Ok(compute_weekly_trend_report(&snapshot, &self.volume, today))
    }

    async fn snapshot(&self, user_id: &str, since: Option<NaiveDate>) -> Result<Vec<WorkoutRecord>> {
        let snapshot = self.provider.workout_history(user_id, since).await?;
        debug!(
            user_id,
            records = snapshot.len(),
            since = ?since,
            "fetched workout history snapshot"
        );
        Ok(snapshot)
    }
}
