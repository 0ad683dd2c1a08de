//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};

/// All events emitted by batch comparisons and simulations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Batch comparison events
    Batch(BatchEvent),
    /// Plate simulation events
    Simulation(SimulationEvent),
}

/// Events during a batch comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BatchEvent {
    /// Batch comparison has started
    Started { total_pairs: usize },
    /// Progress update during comparison
    Progress(BatchProgress),
    /// Batch comparison completed
    Completed { total_pairs: usize, matches: usize },
}

/// Progress information during a batch comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchProgress {
    /// Number of pairs scored so far
    pub completed: usize,
    /// Total number of pairs to score
    pub total: usize,
    /// Number of pairs that met the match threshold so far
    pub matches: usize,
}

/// Events during a plate simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// A suite has started
    SuiteStarted { suite: SimulationSuite, total: usize },
    /// Progress update within a suite
    Progress {
        suite: SimulationSuite,
        completed: usize,
        total: usize,
    },
    /// A suite completed
    SuiteCompleted {
        suite: SimulationSuite,
        passed: usize,
        failed: usize,
    },
}

/// The two suites of a plate simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationSuite {
    /// Valid plates compared against a copy with one character changed
    ValidPlates,
    /// Valid plates compared against random noise
    InvalidPlates,
}

impl std::fmt::Display for SimulationSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationSuite::ValidPlates => write!(f, "Valid plates"),
            SimulationSuite::InvalidPlates => write!(f, "Invalid plates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Batch(BatchEvent::Progress(BatchProgress {
            completed: 10,
            total: 50,
            matches: 7,
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Batch(BatchEvent::Progress(p)) => {
                assert_eq!(p.completed, 10);
                assert_eq!(p.matches, 7);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn suite_display() {
        assert_eq!(SimulationSuite::ValidPlates.to_string(), "Valid plates");
        assert_eq!(SimulationSuite::InvalidPlates.to_string(), "Invalid plates");
    }
}
