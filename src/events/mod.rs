//! # Events Module
//!
//! Event-driven progress reporting for batch comparisons and simulations.
//!
//! ## Design
//! The core library emits events through channels, allowing any UI
//! (CLI, GUI, web) to subscribe and display progress.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Batch(BatchEvent::Progress(p)) = event {
//!             println!("Scored {}/{}", p.completed, p.total);
//!         }
//!     }
//! });
//!
//! compare_pairs_with_events(&pairs, &scorer, &strategy, &sender);
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
