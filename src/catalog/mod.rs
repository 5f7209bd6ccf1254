//! Engine catalog: typed records plus brand/id lookups

pub mod model;
pub mod store;

pub use model::{
    Aspiration, Brand, CompatibleVehicle, Engine, EngineSpecs, EngineSummary, Faq, Fuel,
    ReliabilityIssue, SeoMeta, Severity,
};
pub use store::{Catalog, CatalogError};

/// Brand files compiled into the binary, in listing order
const BUILTIN_BRANDS: &[(&str, &str)] = &[
    ("toyota.toml", include_str!("../../data/brands/toyota.toml")),
    ("volkswagen.toml", include_str!("../../data/brands/volkswagen.toml")),
    ("bmw.toml", include_str!("../../data/brands/bmw.toml")),
];

impl Catalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        for (name, src) in BUILTIN_BRANDS {
            let brand = Catalog::from_toml_str(src).map_err(|e| match e {
                CatalogError::ParseError { source, .. } => CatalogError::ParseError {
                    path: (*name).to_string(),
                    source,
                },
                other => other,
            })?;
            catalog.merge(brand)?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        let slugs: Vec<_> = catalog.brands().iter().map(|b| b.slug.as_str()).collect();
        assert_eq!(slugs, vec!["toyota", "volkswagen", "bmw"]);
        assert_eq!(catalog.engines_for_brand("toyota").len(), 10);
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let engine = catalog.get_engine("toyota", "2gr-fe").unwrap();
        assert_eq!(engine.name, "2GR-FE");
        assert_eq!(engine.specs.cylinders, 6);
        assert_eq!(engine.worst_issue(), Some(Severity::High));
        assert!(engine.seo.is_some());
    }
}
