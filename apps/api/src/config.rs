use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default for local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub taxonomy_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            taxonomy_path: PathBuf::from(
                std::env::var("SKILLS_TAXONOMY_PATH")
                    .unwrap_or_else(|_| "skills_taxonomy.json".to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origins: parse_cors(
                &std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ),
        })
    }
}

/// Parses a comma-separated allowed-origin list, e.g.
///   CORS_ALLOWED_ORIGINS=https://your-app.vercel.app,http://localhost:5173
/// Empty input yields no origins; a lone "*" selects the permissive layer.
pub fn parse_cors(origins: &str) -> Vec<String> {
    let s = origins.trim();
    if s.is_empty() {
        return Vec::new();
    }
    if s == "*" {
        return vec!["*".to_string()];
    }
    s.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cors_empty() {
        assert!(parse_cors("").is_empty());
        assert!(parse_cors("   ").is_empty());
    }

    #[test]
    fn test_parse_cors_wildcard() {
        assert_eq!(parse_cors("*"), vec!["*"]);
    }

    #[test]
    fn test_parse_cors_list_trims_and_skips_blanks() {
        assert_eq!(
            parse_cors("https://a.example, http://localhost:5173, ,"),
            vec!["https://a.example", "http://localhost:5173"]
        );
    }
}
