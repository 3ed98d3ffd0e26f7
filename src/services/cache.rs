use std::sync::Arc;
use std::time::Duration;

use crate::models::Tutor;
use crate::services::catalog::{CatalogClient, CatalogError};

const SNAPSHOT_KEY: &str = "catalog:tutors";

/// In-memory catalog snapshot cache
///
/// The whole approved-tutor collection is one cache entry with a TTL, so
/// a burst of searches reuses one upstream fetch. The search pipeline
/// itself stays cache-free; staleness policy lives entirely here.
pub struct CatalogCache {
    snapshots: moka::future::Cache<String, Arc<Vec<Tutor>>>,
}

impl CatalogCache {
    /// Create a new snapshot cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let snapshots = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { snapshots }
    }

    /// Get the shared catalog snapshot, fetching on miss
    ///
    /// Concurrent callers during a miss are coalesced into a single
    /// upstream fetch and all receive the same snapshot. A failed fetch is
    /// not cached; the next caller retries.
    pub async fn snapshot(
        &self,
        catalog: &CatalogClient,
    ) -> Result<Arc<Vec<Tutor>>, Arc<CatalogError>> {
        self.snapshots
            .try_get_with(SNAPSHOT_KEY.to_string(), async {
                let tutors = catalog.list_tutors().await?;
                tracing::debug!("Cached catalog snapshot: {} tutors", tutors.len());
                Ok(Arc::new(tutors))
            })
            .await
    }

    /// Drop the snapshot so the next search refetches
    pub async fn invalidate(&self) {
        self.snapshots.invalidate(SNAPSHOT_KEY).await;
        tracing::debug!("Catalog snapshot invalidated");
    }

    /// Number of resident snapshots (0 or 1 in practice)
    pub fn entry_count(&self) -> u64 {
        self.snapshots.entry_count()
    }
}
