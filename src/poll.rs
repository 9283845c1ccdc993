// SPDX-License-Identifier: MIT

//! Poller contract
//!
//! The resource poller lives outside this crate: it owns the provider SDK,
//! pagination, and rate limiting. This module only defines the seam — the
//! trait a poller implements and the sample record it returns — plus the
//! collation step that orders per-target batches into one timeline.

use crate::error::NimbusError;
use crate::plan::FetchTarget;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped metric observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub product: String,
    pub item: String,
    pub metric: String,
    pub value: f64,
}

/// Trait for pollers that execute a fetch plan over a time window.
#[async_trait]
pub trait Poller: Send + Sync {
    /// Fetch samples for every target between `from` and `to`.
    async fn poll(
        &self,
        plan: &[FetchTarget],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Sample>, NimbusError>;
}

/// Flatten per-target result batches into one time-ordered list. Stable, so
/// samples with equal timestamps keep their target order.
pub fn collate(batches: Vec<Vec<Sample>>) -> Vec<Sample> {
    let mut samples: Vec<Sample> = batches.into_iter().flatten().collect();
    samples.sort_by_key(|s| s.time);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(secs: i64, metric: &str) -> Sample {
        Sample {
            time: Utc.timestamp_opt(secs, 0).unwrap(),
            product: "EC2".to_string(),
            item: "i-1".to_string(),
            metric: metric.to_string(),
            value: 1.0,
        }
    }

    #[test]
    fn test_collate_orders_by_time() {
        let collated = collate(vec![
            vec![sample(30, "CPUUtilization"), sample(10, "CPUUtilization")],
            vec![sample(20, "DiskReadOps")],
        ]);
        let times: Vec<i64> = collated.iter().map(|s| s.time.timestamp()).collect();
        assert_eq!(times, vec![10, 20, 30]);
    }

    #[test]
    fn test_collate_is_stable_for_equal_times() {
        let collated = collate(vec![vec![sample(10, "first")], vec![sample(10, "second")]]);
        assert_eq!(collated[0].metric, "first");
        assert_eq!(collated[1].metric, "second");
    }

    struct FixedPoller {
        samples: Vec<Sample>,
    }

    #[async_trait]
    impl Poller for FixedPoller {
        async fn poll(
            &self,
            _plan: &[FetchTarget],
            from: DateTime<Utc>,
            to: DateTime<Utc>,
        ) -> Result<Vec<Sample>, NimbusError> {
            Ok(self
                .samples
                .iter()
                .filter(|s| s.time >= from && s.time < to)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn test_poller_contract_filters_window() {
        let poller = FixedPoller {
            samples: vec![sample(5, "a"), sample(15, "b"), sample(25, "c")],
        };
        let from = Utc.timestamp_opt(10, 0).unwrap();
        let to = Utc.timestamp_opt(20, 0).unwrap();
        let got = poller.poll(&[], from, to).await.unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].metric, "b");
    }
}
