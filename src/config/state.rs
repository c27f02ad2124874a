// Application state module
// Everything a request handler needs, shared behind one Arc

use std::sync::Arc;

use super::types::Config;
use crate::cache::ClassificationCache;
use crate::funfact::FunFactSource;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Result cache, `None` when `cache.enabled` is false
    pub cache: Option<ClassificationCache>,
    pub fun_facts: Arc<dyn FunFactSource>,
}

impl AppState {
    pub fn new(config: &Config, fun_facts: Arc<dyn FunFactSource>) -> Self {
        let cache = config.cache.enabled.then(ClassificationCache::new);
        Self {
            config: config.clone(),
            cache,
            fun_facts,
        }
    }
}
