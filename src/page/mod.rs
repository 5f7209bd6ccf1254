//! Page assembly
//!
//! Turns catalog records into render-ready page models: the engine itself,
//! its related engines, SEO metadata and JSON-LD. Assembled engine pages are
//! kept in an LRU cache since the catalog is immutable once loaded.

pub mod metadata;
pub mod schema;

use crate::catalog::{Catalog, Engine, EngineSummary};
use crate::config::AppConfig;
use crate::related::{select_window_cloned, WindowPolicy};
use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use metadata::PageMetadata;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    #[error("Engine not found: {brand}/{id}")]
    NotFound { brand: String, id: String },
}

/// Everything a renderer needs for one engine page
#[derive(Debug, Clone, Serialize)]
pub struct EnginePage {
    pub brand_name: String,
    pub engine: Engine,
    /// Neighboring engines of the same brand; may be empty
    pub related: Vec<EngineSummary>,
    pub metadata: PageMetadata,
    pub schema: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandIndexPage {
    pub brand: String,
    pub name: String,
    pub engines: Vec<EngineSummary>,
    pub metadata: PageMetadata,
}

type PageCache = LruCache<(String, String), Arc<EnginePage>>;

/// Builds pages from a shared catalog
pub struct PageBuilder {
    catalog: Arc<Catalog>,
    config: AppConfig,
    cache: Arc<Mutex<PageCache>>,
}

impl PageBuilder {
    pub fn new(catalog: Arc<Catalog>, config: AppConfig) -> Self {
        let capacity = NonZeroUsize::new(config.page_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            catalog,
            config,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Related engines for `brand/id` using the configured window
    pub fn related(&self, brand: &str, id: &str) -> Vec<EngineSummary> {
        self.related_with(brand, id, self.config.related)
    }

    pub fn related_with(
        &self,
        brand: &str,
        id: &str,
        policy: WindowPolicy,
    ) -> Vec<EngineSummary> {
        let items = self.catalog.engines_for_brand(brand);
        select_window_cloned(&items, &id.trim().to_ascii_lowercase(), policy)
    }

    /// Assemble (or fetch from cache) the page for `brand/id`
    pub fn build(&self, brand: &str, id: &str) -> Result<Arc<EnginePage>, PageError> {
        let key = (brand.trim().to_ascii_lowercase(), id.trim().to_ascii_lowercase());

        {
            let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(page) = cache.get(&key) {
                tracing::debug!("Page cache hit for {}/{}", key.0, key.1);
                return Ok(Arc::clone(page));
            }
        }

        let brand_record = self
            .catalog
            .brand(&key.0)
            .ok_or_else(|| PageError::UnknownBrand(key.0.clone()))?;
        let engine = self
            .catalog
            .get_engine(&key.0, &key.1)
            .ok_or_else(|| PageError::NotFound {
                brand: key.0.clone(),
                id: key.1.clone(),
            })?;

        let metadata = metadata::engine_metadata(&self.config, brand_record, engine);
        let schema = schema::engine_schema(&self.config, brand_record, engine, &metadata);
        let related = self.related(&key.0, &key.1);

        tracing::debug!(
            "Assembled page {}/{} with {} related engines",
            key.0,
            key.1,
            related.len()
        );

        let page = Arc::new(EnginePage {
            brand_name: brand_record.name.clone(),
            engine: engine.clone(),
            related,
            metadata,
            schema,
        });

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.put(key, Arc::clone(&page));

        Ok(page)
    }

    pub fn brand_index(&self, brand: &str) -> Result<BrandIndexPage, PageError> {
        let record = self
            .catalog
            .brand(brand)
            .ok_or_else(|| PageError::UnknownBrand(brand.trim().to_string()))?;

        Ok(BrandIndexPage {
            brand: record.slug.clone(),
            name: record.name.clone(),
            engines: self.catalog.engines_for_brand(&record.slug),
            metadata: metadata::brand_metadata(&self.config, record),
        })
    }

    pub fn cached_pages(&self) -> usize {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.len()
    }

    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.clear();
    }
}

impl Clone for PageBuilder {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
            cache: Arc::clone(&self.cache),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PageBuilder {
        PageBuilder::new(Arc::new(Catalog::builtin().unwrap()), AppConfig::default())
    }

    #[test]
    fn test_build_page() {
        let builder = builder();
        let page = builder.build("toyota", "2gr-fe").unwrap();
        assert_eq!(page.brand_name, "Toyota");
        assert_eq!(page.engine.id, "2gr-fe");
        assert_eq!(page.related.len(), 7);
        assert!(page.related.iter().all(|r| r.id != "2gr-fe"));
        assert_eq!(
            page.metadata.canonical_url,
            "https://motorspec.example.com/engines/toyota/2gr-fe"
        );
    }

    #[test]
    fn test_page_cache() {
        let builder = builder();
        let first = builder.build("toyota", "1nz-fe").unwrap();
        let second = builder.build("TOYOTA", "1NZ-FE").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builder.cached_pages(), 1);

        builder.clear_cache();
        assert_eq!(builder.cached_pages(), 0);
    }

    #[test]
    fn test_cache_survives_poisoned_lock() {
        let builder = builder();
        builder.build("bmw", "n54").unwrap();

        let cache = Arc::clone(&builder.cache);
        let result = std::thread::spawn(move || {
            let _guard = cache.lock().unwrap();
            panic!("poison page cache");
        })
        .join();
        assert!(result.is_err());
        assert!(builder.cache.is_poisoned());

        assert_eq!(builder.cached_pages(), 1);
        builder.build("bmw", "b58").unwrap();
        assert_eq!(builder.cached_pages(), 2);
        builder.clear_cache();
        assert_eq!(builder.cached_pages(), 0);
    }

    #[test]
    fn test_missing_engine() {
        let builder = builder();
        assert_eq!(
            builder.build("toyota", "nope").unwrap_err(),
            PageError::NotFound {
                brand: "toyota".to_string(),
                id: "nope".to_string()
            }
        );
        assert!(matches!(
            builder.build("lada", "vaz-2106"),
            Err(PageError::UnknownBrand(_))
        ));
    }

    #[test]
    fn test_related_for_unknown_engine_is_prefix() {
        let builder = builder();
        let related = builder.related("bmw", "s65");
        let ids: Vec<_> = related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["n47", "n54", "n55", "b48", "b58"]);
    }

    #[test]
    fn test_brand_index() {
        let builder = builder();
        let index = builder.brand_index("volkswagen").unwrap();
        assert_eq!(index.name, "Volkswagen");
        assert_eq!(index.engines.len(), 5);
        assert!(index.metadata.canonical_url.ends_with("/engines/volkswagen"));
    }
}
