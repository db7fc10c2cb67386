//! `amr-console` - terminal operations console for an AMR fleet.
//!
//! Wires the pure state model from `amr-state` to an MQTT feed and a
//! ratatui front end: configuration, transport thread, role permissions,
//! translations and rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Broker configuration and endpoint parsing.
pub mod config;
/// Console errors.
pub mod error;
/// MQTT transport feed.
pub mod feed;
/// Locale tables and data-string translation.
pub mod i18n;
/// Role permissions and their persisted store.
pub mod permissions;
/// Terminal UI.
pub mod ui;

pub use config::BrokerConfig;
pub use error::ConsoleError;
pub use feed::{spawn_feed, FeedEvent, FeedHandle};
