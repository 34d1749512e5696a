use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::logging::{json_log, obj, v_num, v_str, Domain};
use crate::oracle::Provider;
use crate::report::OracleReport;

/// BytePlus Ark (Seed models), OpenAI-style chat completions.
pub struct Ark {
    client: Client,
    base: String,
    model: String,
    api_key: Option<String>,
}

impl Ark {
    pub fn new(cfg: Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base: cfg.ark_base,
            model: cfg.model,
            api_key: cfg.ark_api_key,
        })
    }
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[async_trait::async_trait]
impl Provider for Ark {
    async fn generate_report(&self, prompt: &str) -> Result<OracleReport> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| anyhow!("ARK_API_KEY is not set"))?;

        let url = format!("{}/api/v3/chat/completions", self.base);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": [{ "type": "text", "text": prompt }] }
            ],
            "response_format": { "type": "json_object" }
        });

        json_log(
            Domain::Oracle,
            "request",
            obj(&[
                ("provider", v_str("ark")),
                ("model", v_str(&self.model)),
                ("prompt_chars", v_num(prompt.len() as f64)),
            ]),
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(anyhow!("Ark API error: {} - {}", status, body));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).context("malformed Ark envelope")?;
        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("no content received from Ark"))?;

        let report =
            OracleReport::from_untrusted_json(content).context("invalid report from Ark")?;

        json_log(
            Domain::Oracle,
            "response",
            obj(&[
                ("provider", v_str("ark")),
                ("subject", v_str(&report.report_meta.subject)),
            ]),
        );
        Ok(report)
    }
}
