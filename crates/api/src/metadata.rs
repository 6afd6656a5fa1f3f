//! Filter metadata aggregation with a short in-process cache.
//!
//! The search form needs the distinct academic groups, colleges, cities,
//! and the regions derived from them. These only change when the
//! collection is reseeded, so approximate freshness is enough.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::RwLock;
use unipath_core::regions::region_for_city;
use unipath_db::repositories::SchoolRepo;
use unipath_db::DbPool;

/// How long a cached snapshot stays valid.
const METADATA_TTL: Duration = Duration::from_secs(300);

/// Distinct filter values derived from the school collection.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolMetadata {
    pub academic_groups: Vec<String>,
    pub colleges: Vec<String>,
    pub regions: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug)]
struct CachedEntry {
    fetched_at: Instant,
    metadata: SchoolMetadata,
}

/// Read-through cache shared across handlers via [`crate::state::AppState`].
#[derive(Clone, Default)]
pub struct MetadataCache {
    inner: Arc<RwLock<Option<CachedEntry>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current metadata, refreshed from the database when the cached
    /// snapshot is older than the TTL.
    pub async fn get(&self, pool: &DbPool) -> Result<SchoolMetadata, sqlx::Error> {
        if let Some(entry) = self.inner.read().await.as_ref() {
            if entry.fetched_at.elapsed() < METADATA_TTL {
                return Ok(entry.metadata.clone());
            }
        }

        let metadata = fetch_metadata(pool).await?;
        *self.inner.write().await = Some(CachedEntry {
            fetched_at: Instant::now(),
            metadata: metadata.clone(),
        });
        Ok(metadata)
    }

    /// Drop the cached snapshot. Called after a reseed so the next request
    /// sees the new collection immediately.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}

async fn fetch_metadata(pool: &DbPool) -> Result<SchoolMetadata, sqlx::Error> {
    let academic_groups = SchoolRepo::distinct_academic_groups(pool).await?;
    let colleges = SchoolRepo::distinct_colleges(pool).await?;
    let cities = SchoolRepo::distinct_cities(pool).await?;

    let regions: Vec<String> = cities
        .iter()
        .map(|city| region_for_city(city).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Ok(SchoolMetadata {
        academic_groups,
        colleges,
        regions,
        cities,
    })
}
