//! In-memory engine catalog and lookups

use super::model::{Brand, Engine, EngineSummary};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk data directory: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid catalog entry: {0}")]
    ValidationError(String),

    #[error("Duplicate engine '{id}' in brand '{brand}'")]
    DuplicateEngine { brand: String, id: String },
}

/// Ordered collection of brands and their engines
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brands: Vec<Brand>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single brand document
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        Self::parse_brand(src, "<inline>").map(|brand| Self {
            brands: vec![brand],
        })
    }

    /// Load every `*.toml` brand file under `dir`, in path order
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().and_then(|s| s.to_str()) == Some("toml")
            {
                files.push(path.to_path_buf());
            }
        }
        files.sort();

        let mut catalog = Self::new();
        for path in files {
            let src = std::fs::read_to_string(&path)?;
            let brand = Self::parse_brand(&src, &path.display().to_string())?;
            tracing::debug!(
                "Loaded brand '{}' ({} engines) from {:?}",
                brand.slug,
                brand.engines.len(),
                path
            );
            catalog.add_brand(brand)?;
        }
        Ok(catalog)
    }

    fn parse_brand(src: &str, origin: &str) -> Result<Brand, CatalogError> {
        let mut brand: Brand = toml::from_str(src).map_err(|source| CatalogError::ParseError {
            path: origin.to_string(),
            source,
        })?;

        brand.slug = brand.slug.trim().to_ascii_lowercase();
        if brand.slug.is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "brand slug cannot be empty ({})",
                origin
            )));
        }
        if brand.name.trim().is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "brand '{}' has no name",
                brand.slug
            )));
        }

        let mut seen = HashSet::new();
        for engine in &mut brand.engines {
            engine.id = engine.id.trim().to_ascii_lowercase();
            engine.brand = brand.slug.clone();
            if engine.id.is_empty() || engine.name.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "engine in brand '{}' is missing an id or name",
                    brand.slug
                )));
            }
            if !seen.insert(engine.id.clone()) {
                return Err(CatalogError::DuplicateEngine {
                    brand: brand.slug.clone(),
                    id: engine.id.clone(),
                });
            }
        }

        Ok(brand)
    }

    fn add_brand(&mut self, brand: Brand) -> Result<(), CatalogError> {
        match self.brands.iter_mut().find(|b| b.slug == brand.slug) {
            Some(existing) => {
                for engine in brand.engines {
                    if existing.engines.iter().any(|e| e.id == engine.id) {
                        return Err(CatalogError::DuplicateEngine {
                            brand: existing.slug.clone(),
                            id: engine.id,
                        });
                    }
                    existing.engines.push(engine);
                }
            }
            None => self.brands.push(brand),
        }
        Ok(())
    }

    /// Merge another catalog into this one; existing brands get the new engines appended
    pub fn merge(&mut self, other: Catalog) -> Result<(), CatalogError> {
        for brand in other.brands {
            self.add_brand(brand)?;
        }
        Ok(())
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn brand(&self, slug: &str) -> Option<&Brand> {
        let slug = slug.trim();
        self.brands
            .iter()
            .find(|b| b.slug.eq_ignore_ascii_case(slug))
    }

    /// Look up an engine by brand and id
    pub fn get_engine(&self, brand: &str, id: &str) -> Option<&Engine> {
        let id = id.trim();
        self.brand(brand)?
            .engines
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(id))
    }

    /// `{id, name}` records for a brand in published order; empty for unknown brands
    pub fn engines_for_brand(&self, brand: &str) -> Vec<EngineSummary> {
        self.brand(brand)
            .map(|b| b.engines.iter().map(Engine::summary_record).collect())
            .unwrap_or_default()
    }

    pub fn engine_count(&self) -> usize {
        self.brands.iter().map(|b| b.engines.len()).sum()
    }
}
