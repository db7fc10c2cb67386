//! Message routing.
//!
//! The [`Router`] is the sole writer of dashboard state: transport
//! lifecycle events drive the connection state machine, inbound messages
//! run parse → merge. It must only be called from one thread.

#![allow(missing_docs)]

use crate::metrics::FeedMetrics;
use crate::payload::{parse_payload, Topic};
use crate::state::Dashboard;

/// Transport lifecycle notifications, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Connecting,
    Connected,
    Disconnected,
    Error(String),
}

#[derive(Debug, Default)]
pub struct Router {
    dashboard: Dashboard,
    metrics: FeedMetrics,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    #[must_use]
    pub fn metrics(&self) -> FeedMetrics {
        self.metrics
    }

    /// Record a configuration failure; the connection stays down for the
    /// whole session.
    pub fn fail_configuration(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "broker configuration invalid, feed disabled");
        self.dashboard.connection.fail_configuration(message);
    }

    pub fn handle_transport(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Connecting => self.dashboard.connection.on_connecting(),
            TransportEvent::Connected => self.dashboard.connection.on_connect(),
            TransportEvent::Disconnected => self.dashboard.connection.on_close(),
            TransportEvent::Error(message) => self.dashboard.connection.on_error(message),
        }
    }

    /// Parse one raw message and fold it into the dashboard.
    ///
    /// Returns whether the message was applied. Failures never propagate;
    /// they only move counters.
    pub fn handle_message(&mut self, topic: &str, body: &str) -> bool {
        self.metrics.received += 1;
        let Some(payload) = parse_payload(topic, body) else {
            if Topic::parse(topic).is_none() {
                self.metrics.ignored += 1;
                tracing::debug!(topic, "message on unknown topic ignored");
            } else {
                self.metrics.dropped += 1;
                tracing::debug!(topic, "malformed message dropped");
            }
            return false;
        };
        self.dashboard.connection.touch();
        self.dashboard.apply(payload);
        self.metrics.applied += 1;
        true
    }
}
