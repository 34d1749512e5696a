//! Environment-driven configuration.

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub ark_api_key: Option<String>,
    pub model: String,
    pub language: String,
    pub gemini_base: String,
    pub ark_base: String,
    pub string_1_label: String,
    pub string_2_label: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            ark_api_key: std::env::var("ARK_API_KEY").ok(),
            model: std::env::var("ORACLE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            language: std::env::var("ORACLE_LANGUAGE")
                .unwrap_or_else(|_| "English".to_string()),
            gemini_base: std::env::var("GEMINI_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            ark_base: std::env::var("ARK_BASE")
                .unwrap_or_else(|_| "https://ark.ap-southeast.bytepluses.com".to_string()),
            string_1_label: std::env::var("STRING_1_LABEL")
                .unwrap_or_else(|_| "Phone Number".to_string()),
            string_2_label: std::env::var("STRING_2_LABEL")
                .unwrap_or_else(|_| "ID Number".to_string()),
        }
    }

    /// True when the configured model has a usable credential.
    pub fn has_credentials(&self, model: &str) -> bool {
        if model.starts_with("seed-") {
            self.ark_api_key.is_some()
        } else {
            self.gemini_api_key.is_some()
        }
    }
}
