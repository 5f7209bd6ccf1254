//! Catalog models

use crate::related::Identified;
use serde::{Deserialize, Serialize};

/// A manufacturer and its engines, in published order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub slug: String,
    pub name: String,
    #[serde(default, rename = "engine")]
    pub engines: Vec<Engine>,
}

/// Full reference record for one engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    pub id: String,
    pub name: String,
    /// Brand slug; filled in from the owning brand on load
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub summary: String,
    pub specs: EngineSpecs,
    #[serde(default)]
    pub compatibility: Vec<CompatibleVehicle>,
    #[serde(default)]
    pub reliability: Vec<ReliabilityIssue>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMeta>,
}

impl Engine {
    pub fn summary_record(&self) -> EngineSummary {
        EngineSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Highest severity among known issues, if any
    pub fn worst_issue(&self) -> Option<Severity> {
        self.reliability.iter().map(|issue| issue.severity).max()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSpecs {
    pub displacement_cc: u32,
    pub cylinders: u8,
    pub layout: String,
    pub aspiration: Aspiration,
    pub fuel: Fuel,
    pub power_hp: u32,
    pub torque_nm: u32,
    pub production_start: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_end: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valvetrain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bore_mm: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_mm: Option<f32>,
}

impl EngineSpecs {
    /// Displacement in litres, rounded to one decimal the way it is marketed
    pub fn displacement_litres(&self) -> f32 {
        (self.displacement_cc as f32 / 100.0).round() / 10.0
    }

    /// "2004–2012" or "2018–present"
    pub fn production_years(&self) -> String {
        match self.production_end {
            Some(end) => format!("{}–{}", self.production_start, end),
            None => format!("{}–present", self.production_start),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspiration {
    Natural,
    Turbo,
    Supercharged,
    TwinTurbo,
}

impl std::fmt::Display for Aspiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural => write!(f, "naturally aspirated"),
            Self::Turbo => write!(f, "turbocharged"),
            Self::Supercharged => write!(f, "supercharged"),
            Self::TwinTurbo => write!(f, "twin-turbo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    Petrol,
    Diesel,
    Hybrid,
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Petrol => write!(f, "petrol"),
            Self::Diesel => write!(f, "diesel"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// A vehicle the engine was fitted to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibleVehicle {
    pub model: String,
    pub years: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A known reliability problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityIssue {
    pub title: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_mileage_km: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Per-engine overrides for page metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The `{id, name}` record used for listings and related links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSummary {
    pub id: String,
    pub name: String,
}

impl Identified for EngineSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Engine {
    fn id(&self) -> &str {
        &self.id
    }
}
