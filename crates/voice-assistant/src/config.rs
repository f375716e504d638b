//! Assistant configuration from environment variables

use std::env;

use crate::error::AssistantError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Starting position as FEN; standard start if unset
    pub start_fen: Option<String>,

    /// Ranked hypotheses considered per utterance
    pub max_hypotheses: usize,

    /// Separates ranked hypotheses on one input line
    pub hypothesis_separator: String,

    /// Print a JSON report of every resolved command
    pub report_json: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            start_fen: None,
            max_hypotheses: 5,
            hypothesis_separator: "|".to_string(),
            report_json: false,
        }
    }
}

impl AssistantConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AssistantError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let start_fen = lookup("VOICE_CHESS_START_FEN").filter(|fen| !fen.trim().is_empty());

        let max_hypotheses = match lookup("VOICE_CHESS_MAX_HYPOTHESES") {
            Some(value) => value.trim().parse().map_err(|_| {
                AssistantError::Config(format!("VOICE_CHESS_MAX_HYPOTHESES is not a number: {value}"))
            })?,
            None => defaults.max_hypotheses,
        };
        if max_hypotheses == 0 {
            return Err(AssistantError::Config(
                "VOICE_CHESS_MAX_HYPOTHESES must be at least 1".into(),
            ));
        }

        let hypothesis_separator = lookup("VOICE_CHESS_HYPOTHESIS_SEPARATOR")
            .unwrap_or(defaults.hypothesis_separator);
        if hypothesis_separator.is_empty() {
            return Err(AssistantError::Config(
                "VOICE_CHESS_HYPOTHESIS_SEPARATOR must not be empty".into(),
            ));
        }

        let report_json = lookup("VOICE_CHESS_REPORT_JSON")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.report_json);

        Ok(Self {
            start_fen,
            max_hypotheses,
            hypothesis_separator,
            report_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AssistantConfig, AssistantError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AssistantConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), AssistantConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VOICE_CHESS_START_FEN", "4k3/8/8/8/8/8/8/4K2R w K - 0 1"),
            ("VOICE_CHESS_MAX_HYPOTHESES", "3"),
            ("VOICE_CHESS_HYPOTHESIS_SEPARATOR", ";"),
            ("VOICE_CHESS_REPORT_JSON", "true"),
        ])
        .unwrap();
        assert_eq!(config.start_fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K2R w K - 0 1"));
        assert_eq!(config.max_hypotheses, 3);
        assert_eq!(config.hypothesis_separator, ";");
        assert!(config.report_json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("VOICE_CHESS_MAX_HYPOTHESES", "lots")]).is_err());
        assert!(load(&[("VOICE_CHESS_MAX_HYPOTHESES", "0")]).is_err());
        assert!(load(&[("VOICE_CHESS_HYPOTHESIS_SEPARATOR", "")]).is_err());
    }
}
