use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::logging::{json_log, obj, v_num, v_str, Domain};
use crate::oracle::Provider;
use crate::report::OracleReport;

pub struct Gemini {
    client: Client,
    base: String,
    model: String,
    api_key: Option<String>,
}

impl Gemini {
    pub fn new(cfg: Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base: cfg.gemini_base,
            model: cfg.model,
            api_key: cfg.gemini_api_key,
        })
    }
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Part {
    #[serde(default)]
    text: String,
}

#[async_trait::async_trait]
impl Provider for Gemini {
    async fn generate_report(&self, prompt: &str) -> Result<OracleReport> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is not set"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base, self.model, api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        json_log(
            Domain::Oracle,
            "request",
            obj(&[
                ("provider", v_str("gemini")),
                ("model", v_str(&self.model)),
                ("prompt_chars", v_num(prompt.len() as f64)),
            ]),
        );

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(anyhow!("Gemini API error: {} - {}", status, body));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).context("malformed Gemini envelope")?;
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("no response text received from Gemini"))?;

        let report =
            OracleReport::from_untrusted_json(text).context("invalid report from Gemini")?;

        json_log(
            Domain::Oracle,
            "response",
            obj(&[
                ("provider", v_str("gemini")),
                ("subject", v_str(&report.report_meta.subject)),
            ]),
        );
        Ok(report)
    }
}
