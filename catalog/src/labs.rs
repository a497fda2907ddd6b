//! Learning-lab loading and caching.
//!
//! Learning labs are not loaded at startup. The registry resolves them on
//! demand through a [`LabSource`] and memoizes successful loads in a
//! [`LabRepository`], so a lab document is fetched at most once per id under
//! sequential use. Load failures are logged and surface as `None`, never as
//! errors; a failed load is not cached, so a later call retries naturally.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;

use crate::types::LearningLab;

/// Error types for learning-lab loading.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// The backing store could not be read
    #[error("I/O error loading lab {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// The lab document did not parse
    #[error("Malformed lab document {id}: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The source cannot serve requests at all
    #[error("Lab source unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous source of learning-lab documents.
///
/// This is the seam that replaces the original dynamic-import mechanism:
/// implementations may read from disk, serve embedded documents, or stub
/// loads out entirely in tests.
#[async_trait]
pub trait LabSource: Send + Sync {
    /// Load a lab by id.
    ///
    /// `Ok(None)` means the source does not know the id; `Err` means the
    /// source knew it but failed to produce it.
    async fn load_by_id(&self, id: &str) -> Result<Option<LearningLab>, LabError>;

    /// Check whether the source can serve requests.
    async fn is_available(&self) -> bool;
}

/// Lab source reading one JSON document per lab from a directory.
///
/// Documents live at `<dir>/<id>.json`. A missing file is `Ok(None)`; an
/// unreadable or malformed file is an error.
pub struct FsLabSource {
    dir: PathBuf,
}

impl FsLabSource {
    /// Create a source rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl LabSource for FsLabSource {
    async fn load_by_id(&self, id: &str) -> Result<Option<LearningLab>, LabError> {
        let path = self.dir.join(format!("{id}.json"));
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LabError::Io {
                    id: id.to_string(),
                    source: e,
                })
            }
        };

        let lab = serde_json::from_str(&raw).map_err(|e| LabError::Malformed {
            id: id.to_string(),
            source: e,
        })?;
        Ok(Some(lab))
    }

    async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.dir).await.is_ok()
    }
}

/// In-memory lab source over pre-parsed documents.
///
/// Used for embedded content and in tests.
#[derive(Default)]
pub struct StaticLabSource {
    labs: HashMap<String, LearningLab>,
}

impl StaticLabSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a lab, keyed by its own id.
    pub fn with_lab(mut self, lab: LearningLab) -> Self {
        self.labs.insert(lab.id.clone(), lab);
        self
    }

    /// Number of labs held by this source.
    pub fn len(&self) -> usize {
        self.labs.len()
    }

    /// Whether the source holds no labs.
    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }
}

#[async_trait]
impl LabSource for StaticLabSource {
    async fn load_by_id(&self, id: &str) -> Result<Option<LearningLab>, LabError> {
        Ok(self.labs.get(id).cloned())
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Memoizing facade over a [`LabSource`].
///
/// Successful loads are cached and shared via `Arc`; repeated gets for the
/// same id return the same allocation. Concurrent first loads of one id are
/// not de-duplicated: both hit the source, the later insert wins, and every
/// subsequent get shares a single cached value.
pub struct LabRepository {
    source: Arc<dyn LabSource>,
    cache: DashMap<String, Arc<LearningLab>>,
}

impl LabRepository {
    /// Create a repository over the given source.
    pub fn new(source: Arc<dyn LabSource>) -> Self {
        Self {
            source,
            cache: DashMap::new(),
        }
    }

    /// Create a repository with no backing source.
    ///
    /// Only labs inserted explicitly (via [`Self::insert`]) resolve.
    pub fn detached() -> Self {
        Self::new(Arc::new(StaticLabSource::new()))
    }

    /// Get a lab by id, loading and caching it on first access.
    ///
    /// Returns `None` for unknown ids and for load failures; failures are
    /// logged at error level and never propagated.
    pub async fn get(&self, id: &str) -> Option<Arc<LearningLab>> {
        if let Some(cached) = self.cache.get(id) {
            return Some(cached.clone());
        }

        match self.source.load_by_id(id).await {
            Ok(Some(lab)) => {
                let lab = Arc::new(lab);
                self.cache.insert(id.to_string(), lab.clone());
                tracing::debug!(lab_id = %id, "Loaded learning lab");
                Some(lab)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::error!(lab_id = %id, error = %e, "Failed to load learning lab");
                None
            }
        }
    }

    /// Insert an already-loaded lab directly into the cache.
    pub fn insert(&self, lab: LearningLab) {
        self.cache.insert(lab.id.clone(), Arc::new(lab));
    }

    /// Check whether a lab is cached without touching the source.
    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }

    /// All currently cached labs.
    pub fn cached(&self) -> Vec<Arc<LearningLab>> {
        self.cache.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Number of cached labs.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached lab.
    pub fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssessmentRubric, LabPhase};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_lab(id: &str) -> LearningLab {
        LearningLab {
            id: id.to_string(),
            category_id: "autonomous-vehicles".to_string(),
            title: "Test Lab".to_string(),
            overview: "Overview".to_string(),
            learning_objectives: vec!["Objective".to_string()],
            phases: vec![LabPhase {
                name: "Explore".to_string(),
                duration_minutes: 15,
                activities: vec!["Read the scenario".to_string()],
                resources: vec![],
            }],
            assessment_rubric: AssessmentRubric::default(),
        }
    }

    /// Source that counts loads, for cache-hit assertions.
    struct CountingSource {
        inner: StaticLabSource,
        loads: AtomicUsize,
    }

    #[async_trait]
    impl LabSource for CountingSource {
        async fn load_by_id(&self, id: &str) -> Result<Option<LearningLab>, LabError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load_by_id(id).await
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_get_caches_after_first_load() {
        let source = Arc::new(CountingSource {
            inner: StaticLabSource::new().with_lab(sample_lab("lab-1")),
            loads: AtomicUsize::new(0),
        });
        let repo = LabRepository::new(source.clone());

        let first = repo.get("lab-1").await.unwrap();
        let second = repo.get("lab-1").await.unwrap();

        // Second call is a cache hit returning the same allocation.
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_resolves_to_none() {
        let repo = LabRepository::new(Arc::new(StaticLabSource::new()));
        assert!(repo.get("unknown-category").await.is_none());
        assert!(!repo.is_cached("unknown-category"));
    }

    #[tokio::test]
    async fn test_failure_is_swallowed_and_not_cached() {
        struct FailingSource;

        #[async_trait]
        impl LabSource for FailingSource {
            async fn load_by_id(&self, id: &str) -> Result<Option<LearningLab>, LabError> {
                Err(LabError::Unavailable(format!("no backend for {id}")))
            }

            async fn is_available(&self) -> bool {
                false
            }
        }

        let repo = LabRepository::new(Arc::new(FailingSource));
        assert!(repo.get("lab-1").await.is_none());
        assert!(!repo.is_cached("lab-1"));
    }

    #[tokio::test]
    async fn test_fs_source_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let lab = sample_lab("lab-fs");
        let path = dir.path().join("lab-fs.json");
        std::fs::write(&path, serde_json::to_string_pretty(&lab).unwrap()).unwrap();

        let source = FsLabSource::new(dir.path());
        assert!(source.is_available().await);

        let loaded = source.load_by_id("lab-fs").await.unwrap().unwrap();
        assert_eq!(loaded.id, "lab-fs");
        assert_eq!(loaded.phases.len(), 1);

        assert!(source.load_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fs_source_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        let source = FsLabSource::new(dir.path());
        let err = source.load_by_id("bad").await.unwrap_err();
        assert!(matches!(err, LabError::Malformed { .. }));
    }
}
