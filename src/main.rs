//! # plate-match CLI
//!
//! Command-line interface for the plate similarity scorer.
//!
//! ## Usage
//! ```bash
//! plate-match compare MH12AB1234 MH12AB1235
//! plate-match batch --input pairs.txt --output json
//! plate-match simulate --count 1000 --seed 42
//! ```

mod cli;

use plate_similarity::Result;

fn main() -> Result<()> {
    cli::run()
}
