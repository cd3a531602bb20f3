//! Cache of rendered public page payloads.
//!
//! Public list endpoints serve from here and fill it on a miss. Writes to a
//! collection revalidate the affected page paths, which drops their entries
//! so the next read goes back to the database.
//!
//! Every path carries a generation that revalidation bumps. A loader reads
//! the generation before querying and stores its result only if the
//! generation is unchanged, so a load that overlapped a write never
//! repopulates the page with pre-write rows.

use std::collections::HashMap;

use async_trait::async_trait;
use clubsite_core::error::CoreError;
use clubsite_core::reorder::Revalidator;
use serde_json::Value;
use tokio::sync::RwLock;

/// Revalidation counter for one page path.
pub type Generation = u64;

#[derive(Default)]
struct Pages {
    payloads: HashMap<String, Value>,
    generations: HashMap<String, Generation>,
}

/// Thread-safe via interior `RwLock`; wrap in `Arc` to share.
#[derive(Default)]
pub struct PageCache {
    inner: RwLock<Pages>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, path: &str) -> Option<Value> {
        self.inner.read().await.payloads.get(path).cloned()
    }

    /// Current generation of `path`. Take it before loading the payload.
    pub async fn generation(&self, path: &str) -> Generation {
        self.inner
            .read()
            .await
            .generations
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    /// Store `payload` if `path` has not been revalidated since `seen`.
    ///
    /// Returns whether the payload was stored.
    pub async fn put(&self, path: &str, seen: Generation, payload: Value) -> bool {
        let mut pages = self.inner.write().await;
        let current = pages.generations.get(path).copied().unwrap_or(0);
        if current != seen {
            return false;
        }
        pages.payloads.insert(path.to_string(), payload);
        true
    }

    /// Drop the cached payload of every path in `paths`.
    pub async fn invalidate(&self, paths: &[&str]) {
        let mut pages = self.inner.write().await;
        for path in paths {
            pages.payloads.remove(*path);
            *pages.generations.entry((*path).to_string()).or_default() += 1;
        }
        tracing::debug!(?paths, "Pages revalidated");
    }
}

#[async_trait]
impl Revalidator for PageCache {
    async fn revalidate(&self, paths: &[&'static str]) -> Result<(), CoreError> {
        self.invalidate(paths).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clubsite_core::collection::CollectionKind;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn revalidate_drops_only_affected_pages() {
        let cache = PageCache::new();
        for (path, n) in [("/board", 1), ("/episodes", 2), ("/projects", 3)] {
            assert!(cache.put(path, 0, json!([n])).await);
        }

        cache
            .revalidate(&CollectionKind::Episodes.affected_paths())
            .await
            .unwrap();

        assert!(cache.get("/episodes").await.is_none());
        assert_eq!(cache.get("/board").await, Some(json!([1])));
        assert_eq!(cache.get("/projects").await, Some(json!([3])));
    }

    #[tokio::test]
    async fn invalidating_unknown_paths_is_harmless() {
        let cache = PageCache::new();
        cache.invalidate(&["/nowhere"]).await;
        assert!(cache.get("/nowhere").await.is_none());
        assert_eq!(cache.generation("/nowhere").await, 1);
    }

    #[tokio::test]
    async fn put_after_revalidation_is_discarded() {
        let cache = PageCache::new();
        let seen = cache.generation("/board").await;

        cache.invalidate(&["/board"]).await;

        assert!(!cache.put("/board", seen, json!(["stale"])).await);
        assert!(cache.get("/board").await.is_none());

        let fresh = cache.generation("/board").await;
        assert!(cache.put("/board", fresh, json!(["fresh"])).await);
        assert_eq!(cache.get("/board").await, Some(json!(["fresh"])));
    }
}
