//! JSON-LD structured data for engine pages

use super::metadata::{brand_url, PageMetadata};
use crate::catalog::{Brand, Engine};
use crate::config::AppConfig;
use serde_json::{json, Value};

/// Build the `@graph` document embedded in an engine page
pub fn engine_schema(
    config: &AppConfig,
    brand: &Brand,
    engine: &Engine,
    metadata: &PageMetadata,
) -> Value {
    let mut graph = vec![
        tech_article(config, brand, engine, metadata),
        breadcrumbs(config, brand, engine, metadata),
    ];

    if !engine.faqs.is_empty() {
        graph.push(faq_page(engine));
    }

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

fn tech_article(
    config: &AppConfig,
    brand: &Brand,
    engine: &Engine,
    metadata: &PageMetadata,
) -> Value {
    let specs = &engine.specs;
    json!({
        "@type": "TechArticle",
        "headline": metadata.title,
        "description": metadata.description,
        "url": metadata.canonical_url,
        "keywords": metadata.keywords.join(", "),
        "about": {
            "@type": "Thing",
            "name": format!("{} {}", brand.name, engine.name),
            "description": format!(
                "{:.1} L {}-cylinder {} {} engine, {} hp / {} Nm, produced {}",
                specs.displacement_litres(),
                specs.cylinders,
                specs.aspiration,
                specs.fuel,
                specs.power_hp,
                specs.torque_nm,
                specs.production_years()
            ),
        },
        "publisher": {
            "@type": "Organization",
            "name": config.site_name,
            "url": config.base_url(),
        },
    })
}

fn breadcrumbs(
    config: &AppConfig,
    brand: &Brand,
    engine: &Engine,
    metadata: &PageMetadata,
) -> Value {
    json!({
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": config.base_url(),
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": brand.name,
                "item": brand_url(config, &brand.slug),
            },
            {
                "@type": "ListItem",
                "position": 3,
                "name": engine.name,
                "item": metadata.canonical_url,
            },
        ],
    })
}

fn faq_page(engine: &Engine) -> Value {
    let questions: Vec<Value> = engine
        .faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}
