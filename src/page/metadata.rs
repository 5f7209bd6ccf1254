//! Page metadata (title, description, canonical URL, keywords)

use crate::catalog::{Brand, Engine};
use crate::config::AppConfig;
use serde::{Deserialize, Serialize};

/// Longest description search engines reliably show
pub const MAX_DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub keywords: Vec<String>,
}

pub fn engine_url(config: &AppConfig, brand: &str, id: &str) -> String {
    format!("{}/engines/{}/{}", config.base_url(), brand, id)
}

pub fn brand_url(config: &AppConfig, brand: &str) -> String {
    format!("{}/engines/{}", config.base_url(), brand)
}

/// Metadata for an engine page; per-engine SEO overrides win over derived values
pub fn engine_metadata(config: &AppConfig, brand: &Brand, engine: &Engine) -> PageMetadata {
    let seo = engine.seo.clone().unwrap_or_default();

    let title = seo.title.unwrap_or_else(|| {
        format!(
            "{} {} Engine Specs, Reliability & Problems | {}",
            brand.name, engine.name, config.site_name
        )
    });

    let description = seo
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            if engine.summary.trim().is_empty() {
                format!(
                    "{} {} engine specifications, compatible vehicles, common problems and FAQs.",
                    brand.name, engine.name
                )
            } else {
                engine.summary.clone()
            }
        });

    let keywords = if seo.keywords.is_empty() {
        vec![
            engine.name.clone(),
            format!("{} {}", brand.name, engine.name),
            format!("{} specs", engine.name),
            format!("{} problems", engine.name),
        ]
    } else {
        seo.keywords
    };

    PageMetadata {
        title,
        description: truncate_description(&description, MAX_DESCRIPTION_CHARS),
        canonical_url: engine_url(config, &brand.slug, &engine.id),
        keywords,
    }
}

pub fn brand_metadata(config: &AppConfig, brand: &Brand) -> PageMetadata {
    PageMetadata {
        title: format!("{} Engines: Specs & Reliability | {}", brand.name, config.site_name),
        description: format!(
            "Technical reference for {} {} engines: specifications, \
             compatible vehicles and known problems.",
            brand.engines.len(),
            brand.name
        ),
        canonical_url: brand_url(config, &brand.slug),
        keywords: vec![format!("{} engines", brand.name)],
    }
}

/// Cut `text` to at most `max` characters on a word boundary, adding "..." when cut
pub fn truncate_description(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }

    let keep: String = text.chars().take(max.saturating_sub(3)).collect();
    let cut = match keep.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &keep[..pos],
        _ => keep.as_str(),
    };
    format!("{}...", cut.trim_end_matches(|c: char| c == ',' || c == '.' || c.is_whitespace()))
}
