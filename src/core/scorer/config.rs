//! Scorer configuration: composite weights and the match threshold.

use super::SimilarityScorer;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weights of the measures combined into the composite score
///
/// The composite is the weighted mean of the measures, so any non-negative
/// weights with a positive sum keep it inside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the block-matching sequence ratio
    pub sequence: f64,
    /// Weight of the edit-distance similarity
    pub edit: f64,
}

impl ScoreWeights {
    pub const DEFAULT_SEQUENCE: f64 = 0.6;
    pub const DEFAULT_EDIT: f64 = 0.4;

    pub fn new(sequence: f64, edit: f64) -> Self {
        Self { sequence, edit }
    }

    /// Check both weights are finite, non-negative and not both zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("sequence", self.sequence), ("edit", self.edit)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if self.total() <= 0.0 {
            return Err(ConfigError::ZeroWeights);
        }

        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.sequence + self.edit
    }

    /// Weighted mean of the two measures
    pub fn combine(&self, sequence_ratio: f64, edit_similarity: f64) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }

        ((self.sequence * sequence_ratio + self.edit * edit_similarity) / total).clamp(0.0, 1.0)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEQUENCE, Self::DEFAULT_EDIT)
    }
}

/// Configuration builder for [`SimilarityScorer`]
///
/// ```
/// use plate_similarity::core::scorer::ScorerConfig;
///
/// let scorer = ScorerConfig::new()
///     .sequence_weight(0.5)
///     .edit_weight(0.5)
///     .match_threshold(0.8)
///     .build()
///     .unwrap();
///
/// assert_eq!(scorer.match_threshold(), 0.8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Composite weights
    pub weights: ScoreWeights,
    /// Minimum composite score counted as a match
    pub match_threshold: f64,
}

impl ScorerConfig {
    pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

    /// Create a configuration with the default weights (0.6 / 0.4) and threshold (0.7)
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
            match_threshold: Self::DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    ///
    /// ```json
    /// { "weights": { "sequence": 0.5, "edit": 0.5 }, "match_threshold": 0.75 }
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), ?config, "Loaded scorer config");
        Ok(config)
    }

    /// Replace both weights
    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the sequence-ratio weight
    pub fn sequence_weight(mut self, weight: f64) -> Self {
        self.weights.sequence = weight;
        self
    }

    /// Set the edit-similarity weight
    pub fn edit_weight(mut self, weight: f64) -> Self {
        self.weights.edit = weight;
        self
    }

    /// Set the match threshold (0.0-1.0)
    pub fn match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;

        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.match_threshold,
            });
        }

        Ok(())
    }

    /// Validate and build the scorer
    pub fn build(self) -> Result<SimilarityScorer, ConfigError> {
        self.validate()?;
        Ok(SimilarityScorer::from_parts(self.weights, self.match_threshold))
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::new()
    }
}
