// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! History providers: the storage seam the engine sits behind
//!
//! The engine never fetches anything itself; a provider hands it a complete,
//! immutable snapshot of one user's workout history. Implementations are
//! expected to pre-filter to the requesting user; the engine performs no
//! authorization.

use crate::models::WorkoutRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod memory;

pub use memory::InMemoryHistory;

/// Supplies completed-and-in-progress workout history for a single user
///
/// `since`, when given, bounds the snapshot server-side so multi-year
/// histories are not materialized for short-window aggregations.
#[async_trait]
pub trait WorkoutHistoryProvider: Send + Sync {
    async fn workout_history(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<WorkoutRecord>>;
}
