//! # Plate Similarity
//!
//! Scores how similar two short strings are, and explains why.
//!
//! Built for license plate matching (e.g. `MH12AB1234` read twice by an OCR
//! pass) but works for any short identifier.
//!
//! ## Architecture
//! The library is split into a pure scoring engine and presentation layers:
//! - `core` - Scoring, diffing, alignment, batch comparison and reporting
//! - `events` - Event-driven progress reporting for batch runs
//! - `error` - User-friendly error types
//! - `cli` - Command-line interface (binary only)
//!
//! ## Example
//! ```
//! use plate_similarity::core::scorer::{composite_similarity, edit_distance};
//!
//! assert_eq!(edit_distance("MH12AB1234", "MH12AB1235"), 1);
//! assert_eq!(composite_similarity("ab12cd", "AB12CD"), 1.0);
//! ```

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, SimilarityError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
/// `RUST_LOG` wins when set; otherwise warnings are shown, and debug
/// output too when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let filter = default_filter(verbose);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}

fn default_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive(verbose)))
}

fn fallback_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
