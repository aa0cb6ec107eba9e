// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Workout Analytics
//!
//! An aggregation engine that turns a user's strength-training history into
//! derived metrics: training volume, consecutive-day streaks, frequency
//! series, muscle-group distribution, personal records, and trend
//! classification.
//!
//! ## Features
//!
//! - **Pure aggregation**: Every calculator is a synchronous, deterministic
//!   function over an immutable history snapshot
//! - **Storage agnostic**: A provider trait supplies the snapshot; SQL
//!   stores and local caches satisfy the same output contract
//! - **Per-limb volume adjustment**: Dumbbell, kettlebell, and unilateral
//!   movements double their counted volume via an explicit keyword catalog
//! - **Configurable**: Keyword catalogs and muscle-group mappings load from
//!   TOML with embedded Korean-first defaults
//!
//! ## Architecture
//!
//! - **Models**: Workout/exercise/set records and the result value objects
//! - **Analytics**: The aggregation engine itself
//! - **Providers**: The storage seam handing snapshots to the engine
//! - **Service**: Glue that fetches a snapshot, then runs the engine
//! - **Config**: Keyword catalogs driving volume adjustment and grouping
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_analytics::config::AnalyticsConfig;
//! use workout_analytics::providers::InMemoryHistory;
//! use workout_analytics::service::AnalyticsService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AnalyticsConfig::load(None)?;
//!     let provider = InMemoryHistory::new(Vec::new());
//!     let service = AnalyticsService::new(Box::new(provider), config);
//!
//!     let stats = service.overall_stats("u-1").await?;
//!     println!("workouts logged: {}", stats.total_workouts);
//!
//!     let frequency = service.workout_frequency("u-1", 30).await?;
//!     println!("avg/week: {}", frequency.average_per_week);
//!
//!     Ok(())
//! }
//! ```

/// The aggregation engine: volume, streaks, frequency, distribution,
/// records, and trend classification
pub mod analytics;

/// Configuration for volume adjustment and muscle-group resolution
pub mod config;

/// Structured logging configuration
pub mod logging;

/// Common data models for workout history and derived results
pub mod models;

/// History providers supplying snapshots to the engine
pub mod providers;

/// User-scoped analytics over an injected provider
pub mod service;
