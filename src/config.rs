use std::env;

use crate::reference::Era;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub start_era: Era,
    /// Values that were set but could not be used, reported on the console at startup.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|val| val.trim().to_string())
                .filter(|val| !val.is_empty())
        };
        let mut warnings = Vec::new();

        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY"));
        let model = non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty("GEMINI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) => secs.clamp(5, 300),
                Err(_) => {
                    warnings.push(format!("GEMINI_TIMEOUT_SECS={raw} is not a number"));
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let start_era = match non_empty("CRICKET_START_ERA") {
            Some(raw) => raw.parse::<Era>().unwrap_or_else(|err| {
                warnings.push(format!("CRICKET_START_ERA: {err}"));
                Era::default()
            }),
            None => Era::default(),
        };

        Self {
            api_key,
            model,
            base_url,
            timeout_secs,
            start_era,
            warnings,
        }
    }
}
