use anyhow::{Context, Result};

/// Analyzer tunables, loaded from environment variables with defaults that
/// match the reference behavior. All analyzer state derived from this config
/// (compiled patterns, taxonomy tables, the keyphrase model) is built once at
/// startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Minimum trimmed text length for an analysis to proceed.
    pub min_text_len: usize,
    /// A PDF strategy's output below this trimmed length triggers fallback.
    pub pdf_fallback_threshold: usize,
    /// Maximum number of keyphrase candidates requested from the model.
    pub keyphrase_top_k: usize,
    /// Keyphrase candidates at or below this score are discarded.
    pub keyphrase_min_score: f32,
    pub rust_log: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_text_len: 50,
            pdf_fallback_threshold: 100,
            keyphrase_top_k: 20,
            keyphrase_min_score: 0.3,
            rust_log: "info".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(AnalyzerConfig {
            min_text_len: env_or("MIN_TEXT_LEN", 50)?,
            pdf_fallback_threshold: env_or("PDF_FALLBACK_THRESHOLD", 100)?,
            keyphrase_top_k: env_or("KEYPHRASE_TOP_K", 20)?,
            keyphrase_min_score: env_or("KEYPHRASE_MIN_SCORE", 0.3)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_text_len, 50);
        assert_eq!(config.pdf_fallback_threshold, 100);
        assert_eq!(config.keyphrase_top_k, 20);
        assert!((config.keyphrase_min_score - 0.3).abs() < f32::EPSILON);
    }
}
