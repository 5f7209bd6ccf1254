//! Motorspec - Engine reference catalog
//!
//! Motorspec publishes structured technical reference pages for vehicle
//! engines: specifications, compatible vehicles, reliability issues, FAQs and
//! SEO metadata/schema.
//!
//! # Módulos Principales
//!
//! - [`catalog`] - Typed engine records and brand/id lookups
//! - [`related`] - Neighbor window selection for "related engines"
//! - [`page`] - Page assembly (metadata, JSON-LD, page cache)
//! - [`forms`] - Contact and newsletter submission handlers
//! - [`config`] - Application configuration
//!
//! # Ejemplo de Uso
//!
//! ```rust
//! use motorspec::{catalog::Catalog, config::AppConfig, page::PageBuilder};
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = Arc::new(Catalog::builtin()?);
//! let pages = PageBuilder::new(catalog, AppConfig::default());
//!
//! let page = pages.build("toyota", "2gr-fe")?;
//! assert!(page.related.iter().all(|r| r.id != "2gr-fe"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod forms;
pub mod logging;
pub mod page;
pub mod related;

pub use catalog::{Catalog, Engine, EngineSummary};
pub use config::AppConfig;
pub use page::{EnginePage, PageBuilder};
pub use related::{select_window, Identified, WindowPolicy};

/// Built-in catalog merged with any brand files from the configured data directory
pub fn load_catalog(config: &AppConfig) -> Result<Catalog, catalog::CatalogError> {
    let mut catalog = Catalog::builtin()?;
    if let Some(dir) = &config.data_dir {
        tracing::info!("Loading extra catalog data from {:?}", dir);
        catalog.merge(Catalog::load_dir(dir)?)?;
    }
    tracing::debug!(
        "Catalog ready: {} brands, {} engines",
        catalog.brands().len(),
        catalog.engine_count()
    );
    Ok(catalog)
}
