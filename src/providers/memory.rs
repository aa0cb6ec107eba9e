// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory history provider backed by a pre-loaded snapshot
//!
//! Mirrors the mobile client's cached-history path and doubles as the test
//! double for the storage layer.

use super::WorkoutHistoryProvider;
use crate::models::WorkoutRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A snapshot-backed provider; records are cloned out per request
pub struct InMemoryHistory {
    records: Vec<WorkoutRecord>,
}

impl InMemoryHistory {
    pub fn new(records: Vec<WorkoutRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl WorkoutHistoryProvider for InMemoryHistory {
    async fn workout_history(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<WorkoutRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.user_id == user_id)
            .filter(|record| since.map_or(true, |cutoff| record.workout_date >= cutoff))
            .cloned()
            .collect())
    }
}
