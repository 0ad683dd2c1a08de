//! Trait definitions for match strategies.

use super::MatchType;

/// Strategy trait for deciding whether a scored pair is a match
pub trait ComparisonStrategy: Send + Sync {
    /// Determine if a composite score counts as a match
    fn is_match(&self, score: f64) -> bool;

    /// Classify the match type of a score
    fn classify(&self, score: f64) -> MatchType;

    /// Get the threshold used
    fn threshold(&self) -> f64;

    /// Human-readable description of the strategy
    fn description(&self) -> String;
}

/// Simple threshold-based match strategy
#[derive(Debug, Clone)]
pub struct ThresholdStrategy {
    /// Minimum composite score to count as a match
    threshold: f64,
}

impl ThresholdStrategy {
    /// Create a new threshold strategy
    ///
    /// Recommended thresholds:
    /// - 0.8: Strict, only near-identical reads
    /// - 0.7: Balanced (default)
    /// - 0.6: Lenient, tolerates two misread characters on a 10 character plate
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn strict() -> Self {
        Self::new(0.8)
    }

    pub fn balanced() -> Self {
        Self::new(0.7)
    }

    pub fn lenient() -> Self {
        Self::new(0.6)
    }
}

impl Default for ThresholdStrategy {
    fn default() -> Self {
        Self::balanced()
    }
}

impl ComparisonStrategy for ThresholdStrategy {
    fn is_match(&self, score: f64) -> bool {
        score >= self.threshold
    }

    fn classify(&self, score: f64) -> MatchType {
        MatchType::from_score(score)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn description(&self) -> String {
        format!(
            "Threshold strategy: pairs scoring >= {:.2} are considered matches",
            self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_strategy_at_boundary() {
        let strategy = ThresholdStrategy::new(0.7);

        assert!(strategy.is_match(0.71));
        assert!(strategy.is_match(0.7));
        assert!(!strategy.is_match(0.69));
    }

    #[test]
    fn threshold_strategy_classifies_correctly() {
        let strategy = ThresholdStrategy::default();

        assert_eq!(strategy.classify(1.0), MatchType::Identical);
        assert_eq!(strategy.classify(0.9), MatchType::VerySimilar);
        assert_eq!(strategy.classify(0.7), MatchType::ModeratelySimilar);
        assert_eq!(strategy.classify(0.5), MatchType::SomewhatSimilar);
        assert_eq!(strategy.classify(0.1), MatchType::NotSimilar);
    }

    #[test]
    fn preset_strategies() {
        assert_eq!(ThresholdStrategy::strict().threshold(), 0.8);
        assert_eq!(ThresholdStrategy::balanced().threshold(), 0.7);
        assert_eq!(ThresholdStrategy::lenient().threshold(), 0.6);
    }

    #[test]
    fn description_includes_threshold() {
        let desc = ThresholdStrategy::new(0.75).description();
        assert!(desc.contains("0.75"));
    }
}
