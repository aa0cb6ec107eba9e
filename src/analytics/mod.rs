// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Analytics Module
//!
//! The aggregation engine that turns a snapshot of workout history into
//! derived training metrics.
//!
//! This module includes:
//! - Training volume calculation with per-limb adjustment
//! - Consecutive-day streak calculation
//! - Daily/weekly/monthly frequency bucketing
//! - Muscle-group distribution
//! - Personal-record resolution
//! - Trend classification over aligned numeric series
//!
//! Every function here is pure and synchronous: it consumes an immutable
//! snapshot, allocates a fresh result, and holds no state between calls, so
//! the aggregators can run in parallel over the same snapshot.

pub mod distribution;
pub mod frequency;
pub mod overview;
pub mod records;
pub mod streaks;
pub mod trends;
pub mod volume;

pub use distribution::compute_muscle_distribution;
pub use frequency::{compute_frequency, compute_frequency_at, VALID_PERIODS};
pub use overview::{compute_exercise_progress, compute_overall_stats, compute_overall_stats_at};
pub use records::{compute_all_records, compute_records};
pub use streaks::{compute_streak, compute_streak_at};
pub use trends::{classify_trend, compute_weekly_trend_report};
pub use volume::{VolumeAdjustment, VolumeCalculator};

/// Errors raised for genuinely invalid call contracts
///
/// Data-shape anomalies (empty snapshots, unknown exercises, missing optional
/// fields) are never errors; they produce documented zero-value results.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("invalid period {0}: valid periods are 7, 30, 90, or 365 days")]
    InvalidPeriod(u32),
}
