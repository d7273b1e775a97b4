use std::sync::Arc;

use crate::cache::{FileCache, MetadataCache};
use crate::config::Config;
use crate::fetcher::{HttpFetcher, PageFetcher};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher + Send + Sync>,
    pub cache: Arc<dyn MetadataCache + Send + Sync>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher),
            cache: Arc::new(FileCache::new(config.cache_path())),
        }
    }
}
