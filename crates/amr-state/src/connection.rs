//! Transport connection status.

#![allow(missing_docs)]

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    #[default]
    Disconnected,
    Error,
}

/// Connection indicator state. Written only by the router.
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    pub latency_ms: Option<u32>,
    pub last_message_at: Option<Instant>,
    pub error: Option<String>,
}

impl ConnectionState {
    /// A connection or reconnection attempt is in flight. Latency and
    /// last-message data are kept until a terminal event.
    pub fn on_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
    }

    pub fn on_connect(&mut self) {
        self.status = ConnectionStatus::Connected;
        self.error = None;
    }

    pub fn on_close(&mut self) {
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn on_error(&mut self, message: impl Into<String>) {
        self.status = ConnectionStatus::Error;
        self.error = Some(message.into());
    }

    /// Configuration failure before any connection attempt. Terminal for
    /// the session; there is nothing to retry.
    pub fn fail_configuration(&mut self, message: impl Into<String>) {
        self.status = ConnectionStatus::Disconnected;
        self.error = Some(message.into());
    }

    /// Record that a well-formed message arrived.
    pub fn touch(&mut self) {
        self.last_message_at = Some(Instant::now());
    }

    /// Whole seconds since the last well-formed message, if any arrived.
    #[must_use]
    pub fn seconds_since_last_message(&self) -> Option<u64> {
        self.last_message_at
            .map(|instant| instant.elapsed().as_secs())
    }
}
