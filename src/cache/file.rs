//! JSON-file-backed cache.
//!
//! The on-disk format is a single object mapping canonical URL to record.
//! Both operations take the store mutex for their whole read-merge-write
//! cycle, so concurrent writers cannot lose each other's entries and a
//! reader never observes a half-written file through this process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::cache::{CachedRecord, MetadataCache};
use crate::extractor::VideoMetadata;
use crate::normalizer::CanonicalUrl;

pub struct FileCache {
    path: PathBuf,
    store_lock: Mutex<()>,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, CachedRecord>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                serde_json::from_str(&contents).context("cache file is not valid JSON")
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e).context("failed to read cache file"),
        }
    }
}

#[async_trait]
impl MetadataCache for FileCache {
    async fn get(&self, url: &CanonicalUrl) -> Result<Option<CachedRecord>> {
        let _guard = self.store_lock.lock().await;
        let entries = self.load().await?;
        Ok(entries.get(url.as_str()).cloned())
    }

    async fn put(&self, url: &CanonicalUrl, metadata: VideoMetadata) -> Result<()> {
        let _guard = self.store_lock.lock().await;
        let mut entries = self.load().await.unwrap_or_default();
        entries.insert(url.as_str().to_string(), CachedRecord::new(metadata));

        let serialized =
            serde_json::to_vec_pretty(&entries).context("failed to serialize cache")?;
        tokio::fs::write(&self.path, serialized)
            .await
            .context("failed to write cache file")?;
        Ok(())
    }
}
