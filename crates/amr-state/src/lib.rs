//! `amr-state` - view state for the AMR fleet operations console.
//!
//! Everything here is pure: payloads come in as text, get validated into
//! typed variants, and are folded into a [`Dashboard`] snapshot by the
//! [`Router`]. No terminal, network or filesystem access.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Connection status state machine.
pub mod connection;
/// Pure merge helpers for state categories.
pub mod merge;
/// Feed counters.
pub mod metrics;
/// Topic set and payload decoding.
pub mod payload;
/// Message routing into the dashboard.
pub mod router;
/// Dashboard snapshot and reducer.
pub mod state;
/// View-state entities and patch shapes.
pub mod types;

pub use connection::{ConnectionState, ConnectionStatus};
pub use metrics::FeedMetrics;
pub use payload::{parse_payload, OneOrMany, Payload, Topic};
pub use router::{Router, TransportEvent};
pub use state::Dashboard;
