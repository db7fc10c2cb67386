//! The fixed topic set and inbound payload decoding.

#![allow(missing_docs)]

use serde::Deserialize;
use serde_json::Value;

use crate::types::{
    BatteryItem, EventItem, JobHistoryItem, LatencyPayload, MapPatch, RobotStatusItem, SummaryPatch,
};

/// The seven subscribed message categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Summary,
    Events,
    Robots,
    Jobs,
    Battery,
    Map,
    Latency,
}

impl Topic {
    /// Every topic, in subscription order.
    pub const ALL: [Topic; 7] = [
        Topic::Summary,
        Topic::Events,
        Topic::Robots,
        Topic::Jobs,
        Topic::Battery,
        Topic::Map,
        Topic::Latency,
    ];

    /// Full topic name including the fixed namespace prefix.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topic::Summary => "amr/summary",
            Topic::Events => "amr/events",
            Topic::Robots => "amr/robots",
            Topic::Jobs => "amr/jobs",
            Topic::Battery => "amr/battery",
            Topic::Map => "amr/map",
            Topic::Latency => "amr/latency",
        }
    }

    /// Match a full topic name; anything outside the fixed set is `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "amr/summary" => Some(Self::Summary),
            "amr/events" => Some(Self::Events),
            "amr/robots" => Some(Self::Robots),
            "amr/jobs" => Some(Self::Jobs),
            "amr/battery" => Some(Self::Battery),
            "amr/map" => Some(Self::Map),
            "amr/latency" => Some(Self::Latency),
            _ => None,
        }
    }
}

/// A payload that is either a single item or a full-list replacement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// A decoded inbound message, tagged with its logical type.
///
/// The envelope wire form `{"type": "...", "payload": ...}` maps onto this
/// enum directly; bare payloads are wrapped by topic in [`parse_payload`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum Payload {
    Summary(SummaryPatch),
    Events(OneOrMany<EventItem>),
    Robots(OneOrMany<RobotStatusItem>),
    Jobs(OneOrMany<JobHistoryItem>),
    Battery(OneOrMany<BatteryItem>),
    Map(MapPatch),
    Latency(LatencyPayload),
}

/// Decode a raw message body for `topic` into a typed payload.
///
/// Returns `None` for anything that is not a well-formed message: invalid
/// JSON, a non-object/array body, an unknown topic, an envelope with an
/// unknown tag, or a bare value that does not fit the topic's shape.
/// Never panics.
#[must_use]
pub fn parse_payload(topic: &str, body: &str) -> Option<Payload> {
    let value: Value = serde_json::from_str(body).ok()?;
    if !value.is_object() && !value.is_array() {
        return None;
    }

    // An explicit envelope overrides topic-based inference.
    if let Some(object) = value.as_object() {
        if object.get("type").is_some_and(Value::is_string) && object.contains_key("payload") {
            return serde_json::from_value(value).ok();
        }
    }

    match Topic::parse(topic)? {
        Topic::Summary => serde_json::from_value(value).ok().map(Payload::Summary),
        Topic::Events => serde_json::from_value(value).ok().map(Payload::Events),
        Topic::Robots => serde_json::from_value(value).ok().map(Payload::Robots),
        Topic::Jobs => serde_json::from_value(value).ok().map(Payload::Jobs),
        Topic::Battery => serde_json::from_value(value).ok().map(Payload::Battery),
        Topic::Map => serde_json::from_value(value).ok().map(Payload::Map),
        Topic::Latency => serde_json::from_value(value).ok().map(Payload::Latency),
    }
}
