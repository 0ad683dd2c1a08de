//! # Core Module
//!
//! The UI-agnostic similarity engine.
//!
//! ## Modules
//! - `scorer` - Pure similarity measures and the composite score
//! - `diff` - Positional diffs and shift alignment for diagnostics
//! - `comparator` - Parallel batch comparison and match strategies
//! - `reporter` - Explains why two strings are similar
//! - `plate` - Plate format checks, generators and simulations

pub mod comparator;
pub mod diff;
pub mod plate;
pub mod reporter;
pub mod scorer;

// Re-export commonly used types
pub use comparator::{MatchResult, MatchType};
pub use diff::{AlignedPair, DiffRecord, DiffStatus};
pub use reporter::{MatchExplanation, PairReport};
pub use scorer::{SimilarityReport, SimilarityScorer, SimilarityScores};
