//! MQTT transport feed.
//!
//! The rumqttc client runs on a worker thread and only forwards raw
//! events; parsing and merging stay on the UI thread so the router remains
//! the single writer. Reconnect policy is rumqttc's own; the feed adds no
//! backoff of its own beyond a short pause between attempts.

#![allow(missing_docs)]

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use rumqttc::{Client, Connection, Event, MqttOptions, Packet, QoS, SubscribeFilter};

use amr_state::Topic;

use crate::config::{BrokerConfig, Endpoint};
use crate::error::ConsoleError;

const KEEP_ALIVE: Duration = Duration::from_secs(30);
const RETRY_PAUSE: Duration = Duration::from_secs(2);
const CHANNEL_CAPACITY: usize = 256;

/// Raw transport notifications delivered to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Connected,
    Reconnecting,
    Disconnected,
    Error(String),
    Message { topic: String, body: String },
}

/// Handle for force-terminating the transport at session end.
pub struct FeedHandle {
    client: Client,
    worker: Option<JoinHandle<()>>,
}

impl FeedHandle {
    /// Force-terminate the connection. No graceful drain.
    pub fn shutdown(mut self) {
        let _ = self.client.disconnect();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Start the transport worker and return its event stream.
pub fn spawn_feed(config: &BrokerConfig) -> Result<(FeedHandle, Receiver<FeedEvent>), ConsoleError> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| ConsoleError::InvalidConfig("broker url not set".into()))?;
    let endpoint = Endpoint::parse(url)?;

    let mut options = MqttOptions::new(config.client_id.clone(), endpoint.host, endpoint.port);
    options.set_keep_alive(KEEP_ALIVE);
    options.set_clean_session(true);
    if let Some(username) = &config.username {
        options.set_credentials(username.clone(), config.password.clone().unwrap_or_default());
    }

    let (client, connection) = Client::new(options, CHANNEL_CAPACITY);
    let (tx, rx) = crossbeam_channel::bounded(CHANNEL_CAPACITY);

    let subscriber = client.clone();
    let worker = thread::Builder::new()
        .name("amr-feed".into())
        .spawn(move || run_feed(connection, &subscriber, &tx))
        .map_err(|err| ConsoleError::Transport(err.to_string()))?;

    Ok((
        FeedHandle {
            client,
            worker: Some(worker),
        },
        rx,
    ))
}

fn run_feed(mut connection: Connection, client: &Client, tx: &Sender<FeedEvent>) {
    if tx.send(FeedEvent::Reconnecting).is_err() {
        return;
    }
    for notification in connection.iter() {
        let keep_going = match notification {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::debug!("broker connection acknowledged");
                subscribe_all(client);
                tx.send(FeedEvent::Connected).is_ok()
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let body = String::from_utf8_lossy(&publish.payload).into_owned();
                tx.send(FeedEvent::Message {
                    topic: publish.topic.clone(),
                    body,
                })
                .is_ok()
            }
            Ok(Event::Incoming(Packet::Disconnect)) => {
                tx.send(FeedEvent::Disconnected).is_ok()
            }
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "transport error, retrying");
                if tx.send(FeedEvent::Error(err.to_string())).is_err() {
                    false
                } else {
                    thread::sleep(RETRY_PAUSE);
                    tx.send(FeedEvent::Reconnecting).is_ok()
                }
            }
        };
        if !keep_going {
            break;
        }
    }
}

/// Subscribe to the whole fixed topic set in one batch.
fn subscribe_all(client: &Client) {
    let filters = Topic::ALL
        .iter()
        .map(|topic| SubscribeFilter::new(topic.name().to_string(), QoS::AtMostOnce));
    if let Err(err) = client.subscribe_many(filters) {
        tracing::debug!(error = %err, "subscribe request failed");
    }
}
