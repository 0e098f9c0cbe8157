//! Server configuration from the environment.

use anyhow::{Context, Result};

/// Runtime configuration for the SEO server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (`PORT`, default 4000)
    pub port: u16,

    /// OpenAI API key (`OPENAI_API_KEY`, required)
    pub openai_api_key: String,

    /// Chat model for generation (`SEO_MODEL`, default gpt-4o)
    pub seo_model: String,

    /// Fragment properties harvested for text
    /// (`SEO_TEXT_PROPERTIES`, comma-separated, default `text`)
    pub text_properties: Vec<String>,

    /// JSON content file to serve fragments from (`CONTENT_PATH`, optional)
    pub content_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()
            .context("PORT must be a number")?;

        let openai_api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;

        let seo_model = std::env::var("SEO_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        let text_properties = std::env::var("SEO_TEXT_PROPERTIES")
            .map(|raw| parse_property_list(&raw))
            .unwrap_or_else(|_| vec!["text".to_string()]);

        let content_path = std::env::var("CONTENT_PATH").ok();

        Ok(Self {
            port,
            openai_api_key,
            seo_model,
            text_properties,
            content_path,
        })
    }
}

fn parse_property_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
