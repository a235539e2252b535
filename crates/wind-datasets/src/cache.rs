//! Build-once cache for the dataset indices.
//!
//! The first [`DatasetCache::ensure`] call spawns a build task; concurrent
//! callers await the same shared future instead of starting their own. A
//! finished build is kept as `Ready`; a failed one is kept as `Failed` until
//! the next call, which starts over.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use wind_model::PostcodeKey;

use crate::error::{DatasetError, Result};
use crate::index::{Datasets, build_datasets};
use crate::site::{SiteLookup, resolve_site};
use crate::source::{DatasetSource, DatasetTexts};

/// Outcome of a build, shared by every waiter.
pub type BuildResult = std::result::Result<Arc<Datasets>, Arc<DatasetError>>;

type SharedBuild = Shared<BoxFuture<'static, BuildResult>>;

enum CacheState {
    Empty,
    Building(SharedBuild),
    Ready(Arc<Datasets>),
    Failed(Arc<DatasetError>),
}

struct CacheInner {
    state: CacheState,
    /// Bumped on every new build and on reset; stale builds do not publish.
    generation: u64,
}

/// Process-wide holder of the built datasets.
///
/// Cloning is cheap and clones share the same state.
#[derive(Clone)]
pub struct DatasetCache {
    source: Arc<dyn DatasetSource>,
    inner: Arc<Mutex<CacheInner>>,
}

impl DatasetCache {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    pub fn from_shared(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            inner: Arc::new(Mutex::new(CacheInner {
                state: CacheState::Empty,
                generation: 0,
            })),
        }
    }

    /// Returns the datasets, building them if needed.
    ///
    /// Must be called from within a Tokio runtime. Dropping the returned
    /// future does not cancel a build already in flight.
    pub async fn ensure(&self) -> BuildResult {
        let build = {
            let mut inner = self.lock();
            let in_flight = match &inner.state {
                CacheState::Ready(datasets) => return Ok(Arc::clone(datasets)),
                CacheState::Building(build) => Some(build.clone()),
                CacheState::Empty | CacheState::Failed(_) => None,
            };
            match in_flight {
                Some(build) => build,
                None => {
                    inner.generation += 1;
                    let build = self.start_build(inner.generation);
                    inner.state = CacheState::Building(build.clone());
                    build
                }
            }
        };
        build.await
    }

    /// The datasets if a build has completed.
    pub fn get(&self) -> Option<Arc<Datasets>> {
        match &self.lock().state {
            CacheState::Ready(datasets) => Some(Arc::clone(datasets)),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.lock().state, CacheState::Ready(_))
    }

    /// True while a build is in flight.
    pub fn is_building(&self) -> bool {
        matches!(self.lock().state, CacheState::Building(_))
    }

    /// Error of the most recent build, if it failed.
    pub fn last_error(&self) -> Option<Arc<DatasetError>> {
        match &self.lock().state {
            CacheState::Failed(error) => Some(Arc::clone(error)),
            _ => None,
        }
    }

    /// Forgets everything. A build still in flight finishes but is discarded.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = CacheState::Empty;
    }

    /// Resolves a site postcode, loading the datasets first.
    ///
    /// A failed load yields an `Unavailable` lookup with fallback wind; the
    /// error stays available through [`last_error`](Self::last_error).
    pub async fn lookup(&self, postcode: &str) -> SiteLookup {
        if PostcodeKey::full(postcode).is_empty() {
            return resolve_site(None, postcode);
        }
        match self.ensure().await {
            Ok(datasets) => resolve_site(Some(&datasets), postcode),
            Err(error) => {
                tracing::warn!(%error, "Datasets unavailable; using fallback wind");
                SiteLookup::unavailable(postcode)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        lock_inner(&self.inner)
    }

    fn start_build(&self, generation: u64) -> SharedBuild {
        tracing::debug!(generation, "Starting dataset build");
        let fetch = self.source.fetch();
        let task_inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            let result = fetch_and_build(fetch).await;
            publish(&task_inner, generation, &result);
            result
        });

        let join_inner = Arc::clone(&self.inner);
        async move {
            match task.await {
                Ok(result) => result,
                Err(source) => {
                    let result: BuildResult = Err(Arc::new(DatasetError::Task { source }));
                    publish(&join_inner, generation, &result);
                    result
                }
            }
        }
        .boxed()
        .shared()
    }
}

impl fmt::Debug for DatasetCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.lock().state {
            CacheState::Empty => "empty",
            CacheState::Building(_) => "building",
            CacheState::Ready(_) => "ready",
            CacheState::Failed(_) => "failed",
        };
        f.debug_struct("DatasetCache").field("state", &state).finish()
    }
}

fn lock_inner(inner: &Mutex<CacheInner>) -> MutexGuard<'_, CacheInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn fetch_and_build(fetch: BoxFuture<'static, Result<DatasetTexts>>) -> BuildResult {
    let texts = fetch.await.map_err(|error| {
        tracing::warn!(%error, "Dataset fetch failed");
        Arc::new(error)
    })?;
    let datasets = tokio::task::spawn_blocking(move || {
        build_datasets(&texts.altitude, &texts.wind)
    })
    .await
    .map_err(|source| Arc::new(DatasetError::Task { source }))?;

    tracing::info!(
        altitude_records = datasets.altitude_index.len(),
        wind_records = datasets.wind_index.len(),
        "Datasets ready"
    );
    Ok(Arc::new(datasets))
}

/// Stores a finished build unless the cache moved on since it started.
fn publish(inner: &Mutex<CacheInner>, generation: u64, result: &BuildResult) {
    let mut inner = lock_inner(inner);
    if inner.generation != generation || !matches!(inner.state, CacheState::Building(_)) {
        return;
    }
    inner.state = match result {
        Ok(datasets) => CacheState::Ready(Arc::clone(datasets)),
        Err(error) => CacheState::Failed(Arc::clone(error)),
    };
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures_util::future::{self, join_all};

    use super::*;
    use crate::site::LookupStatus;
    use crate::source::{DatasetKind, StaticDatasetSource};

    const ALTITUDE: &str = "Postcode,Alt\nSW1A1AA,20\n";
    const WIND: &str = "Postcode,Speed\nSW1A,25\n";

    /// Counts fetches and fails the first `failures` of them.
    struct CountingSource {
        fetches: Arc<AtomicUsize>,
        failures: usize,
    }

    impl CountingSource {
        fn new(failures: usize) -> (Self, Arc<AtomicUsize>) {
            let fetches = Arc::new(AtomicUsize::new(0));
            let source = Self {
                fetches: Arc::clone(&fetches),
                failures,
            };
            (source, fetches)
        }
    }

    impl DatasetSource for CountingSource {
        fn fetch(&self) -> BoxFuture<'static, Result<DatasetTexts>> {
            let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
            let result = if attempt < self.failures {
                Err(DatasetError::Fetch {
                    kind: DatasetKind::Wind,
                    message: format!("attempt {attempt} failed"),
                })
            } else {
                Ok(DatasetTexts::new(ALTITUDE, WIND))
            };
            future::ready(result).boxed()
        }
    }

    #[tokio::test]
    async fn ready_after_first_build() {
        let cache = DatasetCache::new(StaticDatasetSource::new(ALTITUDE, WIND));
        assert!(cache.get().is_none());

        let datasets = cache.ensure().await.expect("build");
        assert_eq!(datasets.altitude_index.len(), 1);
        assert!(cache.is_ready());
        let again = cache.get().expect("ready");
        assert!(Arc::ptr_eq(&datasets, &again));
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_build() {
        let (source, fetches) = CountingSource::new(0);
        let cache = DatasetCache::new(source);

        let results = join_all((0..8).map(|_| cache.ensure())).await;
        let first = results[0].as_ref().expect("build");
        for result in &results {
            assert!(Arc::ptr_eq(first, result.as_ref().expect("build")));
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_is_shared_then_retried() {
        let (source, fetches) = CountingSource::new(1);
        let cache = DatasetCache::new(source);

        let results = join_all((0..4).map(|_| cache.ensure())).await;
        let first = results[0].as_ref().expect_err("first build fails");
        for result in &results {
            assert!(Arc::ptr_eq(first, result.as_ref().expect_err("shared failure")));
        }
        assert!(!cache.is_ready());
        assert!(cache.last_error().is_some());

        cache.ensure().await.expect("retry succeeds");
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert!(cache.last_error().is_none());
    }

    #[tokio::test]
    async fn dropped_caller_does_not_cancel_build() {
        let (source, fetches) = CountingSource::new(0);
        let cache = DatasetCache::new(source);

        assert!(cache.ensure().now_or_never().is_none());
        assert!(cache.is_building());

        cache.ensure().await.expect("build");
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reset_forces_rebuild() {
        let (source, fetches) = CountingSource::new(0);
        let cache = DatasetCache::new(source);

        cache.ensure().await.expect("build");
        cache.reset();
        assert!(cache.get().is_none());

        cache.ensure().await.expect("rebuild");
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn lookup_maps_failure_to_unavailable() {
        let (source, fetches) = CountingSource::new(usize::MAX);
        let cache = DatasetCache::new(source);

        let site = cache.lookup("SW1A 1AA").await;
        assert_eq!(site.status, LookupStatus::Unavailable);
        assert!(site.uses_fallback_wind());

        let idle = cache.lookup("").await;
        assert_eq!(idle.status, LookupStatus::Idle);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn lookup_uses_built_datasets() {
        let cache = DatasetCache::new(StaticDatasetSource::new(ALTITUDE, WIND));
        let site = cache.lookup("SW1A 1AA").await;
        assert_eq!(site.status, LookupStatus::Ready);
        assert_eq!(site.altitude, Some(20.0));
        assert_eq!(site.wind.map(|w| w.speed_ms), Some(25.0));
    }
}
