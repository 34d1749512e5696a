//! Oracle providers: hosted LLM backends that turn the rendered prompt
//! into a structured [`OracleReport`].
//!
//! One request per user action, no automatic retry. Failures carry enough
//! context to surface directly as a user-visible message.

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::report::OracleReport;

mod ark;
mod gemini;

/// A selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const AVAILABLE_MODELS: [ModelInfo; 3] = [
    ModelInfo {
        id: "gemini-2.5-flash",
        name: "Gemini 2.5 Flash",
        description: "Optimized for speed and structured outputs.",
    },
    ModelInfo {
        id: "gemini-2.0-flash",
        name: "Gemini 2.0 Flash",
        description: "The latest fast model with improved reasoning.",
    },
    ModelInfo {
        id: "seed-1-8-251228",
        name: "Seed 1.8 (BytePlus)",
        description: "High-performance model from BytePlus/Volcengine.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Ark,
}

impl ProviderKind {
    /// Model ids starting with `seed-` route to BytePlus Ark, everything
    /// else to Gemini.
    pub fn for_model(model: &str) -> Self {
        if model.starts_with("seed-") {
            ProviderKind::Ark
        } else {
            ProviderKind::Gemini
        }
    }

    pub fn build(self, cfg: Config) -> Result<Box<dyn Provider + Send + Sync>> {
        match self {
            ProviderKind::Gemini => Ok(Box::new(gemini::Gemini::new(cfg)?)),
            ProviderKind::Ark => Ok(Box::new(ark::Ark::new(cfg)?)),
        }
    }
}

#[async_trait]
pub trait Provider {
    /// Send the prompt and return the parsed, validated report.
    async fn generate_report(&self, prompt: &str) -> Result<OracleReport>;
}
