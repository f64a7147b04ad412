//! AI settings loaded from TOML.

use crate::evaluation::{
    AdaptiveEvaluator, CombinedEvaluator, Evaluator, MaterialEvaluator, Strategy,
    StrategyEvaluator, BISHOP_PAIR_BONUS,
};
use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Color", rename_all = "lowercase")]
enum ColorDef {
    White,
    Black,
}

/// Which evaluation the AI plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    /// Piece values only.
    Material,
    /// Material plus tactical motifs.
    Tactical,
    /// Material plus piece placement.
    Positional,
    /// Tactical or positional depending on the stage of the game.
    #[default]
    Adaptive,
}

/// AI configuration.
///
/// Every field is optional in the file:
///
/// ```toml
/// enabled = true
/// color = "black"
/// evaluator = "adaptive"
/// bishop_pair_bonus = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    /// Whether the AI answers moves automatically.
    pub enabled: bool,
    /// The side the AI plays.
    #[serde(with = "ColorDef")]
    pub color: Color,
    pub evaluator: EvaluatorKind,
    pub bishop_pair_bonus: i32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::Black,
            evaluator: EvaluatorKind::default(),
            bishop_pair_bonus: BISHOP_PAIR_BONUS,
        }
    }
}

impl AiConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the text is not a valid config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the configuration at `path`, or the defaults if there is no
    /// file there.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Builds the evaluator this configuration selects.
    pub fn build_evaluator(&self) -> Box<dyn Evaluator> {
        let material = MaterialEvaluator::new(self.bishop_pair_bonus);
        let combined = CombinedEvaluator::with_material(material);
        match self.evaluator {
            EvaluatorKind::Material => Box::new(material),
            EvaluatorKind::Tactical => Box::new(StrategyEvaluator::new(Strategy::Tactical, combined)),
            EvaluatorKind::Positional => {
                Box::new(StrategyEvaluator::new(Strategy::Positional, combined))
            }
            EvaluatorKind::Adaptive => Box::new(AdaptiveEvaluator::new(combined)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Board;

    #[test]
    fn test_parse_full_config() {
        let config = AiConfig::from_toml_str(
            r#"
            enabled = true
            color = "white"
            evaluator = "tactical"
            bishop_pair_bonus = 30
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            AiConfig {
                enabled: true,
                color: Color::White,
                evaluator: EvaluatorKind::Tactical,
                bishop_pair_bonus: 30,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AiConfig::from_toml_str("enabled = true").unwrap();
        assert!(config.enabled);
        assert_eq!(config.color, Color::Black);
        assert_eq!(config.evaluator, EvaluatorKind::Adaptive);
        assert_eq!(config.bishop_pair_bonus, BISHOP_PAIR_BONUS);
    }

    #[test]
    fn test_rejects_unknown_color() {
        let result = AiConfig::from_toml_str(r#"color = "green""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let config = AiConfig::load("/nonexistent/chess-ai.toml").unwrap();
        assert_eq!(config, AiConfig::default());
    }

    #[test]
    fn test_material_evaluator_honours_bonus() {
        let config = AiConfig {
            evaluator: EvaluatorKind::Material,
            bishop_pair_bonus: 80,
            ..AiConfig::default()
        };
        // Bishops on c1 (dark) and f1 (light).
        let board = Board::from_placement("4k3/8/8/8/8/8/8/2B1KB2").unwrap();
        assert_eq!(config.build_evaluator().evaluate_white(&board), 2 * 330 + 80);
    }
}
