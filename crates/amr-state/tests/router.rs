use amr_state::{ConnectionStatus, Router, TransportEvent};

#[test]
fn missing_broker_url_is_a_terminal_disconnect() {
    let mut router = Router::new();
    router.fail_configuration("AMR_MQTT_URL not set");

    let connection = &router.dashboard().connection;
    assert_eq!(connection.status, ConnectionStatus::Disconnected);
    assert_eq!(connection.error.as_deref(), Some("AMR_MQTT_URL not set"));
    assert!(connection.last_message_at.is_none());
}

#[test]
fn lifecycle_transitions() {
    let mut router = Router::new();
    assert_eq!(
        router.dashboard().connection.status,
        ConnectionStatus::Disconnected
    );

    router.handle_transport(TransportEvent::Connecting);
    assert_eq!(
        router.dashboard().connection.status,
        ConnectionStatus::Connecting
    );

    router.handle_transport(TransportEvent::Connected);
    assert_eq!(
        router.dashboard().connection.status,
        ConnectionStatus::Connected
    );
    assert!(router.dashboard().connection.error.is_none());

    // Reconnect attempts go back to connecting without clearing data.
    router.handle_transport(TransportEvent::Connecting);
    assert_eq!(
        router.dashboard().connection.status,
        ConnectionStatus::Connecting
    );

    router.handle_transport(TransportEvent::Error("broken pipe".into()));
    assert_eq!(router.dashboard().connection.status, ConnectionStatus::Error);
    assert_eq!(
        router.dashboard().connection.error.as_deref(),
        Some("broken pipe")
    );

    router.handle_transport(TransportEvent::Disconnected);
    assert_eq!(
        router.dashboard().connection.status,
        ConnectionStatus::Disconnected
    );
}

#[test]
fn connect_clears_previous_error() {
    let mut router = Router::new();
    router.handle_transport(TransportEvent::Error("timeout".into()));
    router.handle_transport(TransportEvent::Connected);
    assert!(router.dashboard().connection.error.is_none());
}

#[test]
fn applied_message_refreshes_last_message_at() {
    let mut router = Router::new();
    assert!(router.dashboard().connection.last_message_at.is_none());

    assert!(router.handle_message("amr/latency", r#"{"ms":90}"#));
    assert!(router.dashboard().connection.last_message_at.is_some());
    assert_eq!(
        router.dashboard().connection.seconds_since_last_message(),
        Some(0)
    );
}

#[test]
fn dropped_message_leaves_state_unchanged() {
    let mut router = Router::new();
    let before = router.dashboard().clone();

    assert!(!router.handle_message("amr/robots", "not json"));

    assert!(router.dashboard().connection.last_message_at.is_none());
    assert_eq!(router.dashboard().robots, before.robots);
    assert_eq!(router.metrics().received, 1);
    assert_eq!(router.metrics().dropped, 1);
    assert_eq!(router.metrics().applied, 0);
}

#[test]
fn unknown_topic_counts_as_ignored() {
    let mut router = Router::new();
    assert!(!router.handle_message("amr/telemetry", r#"{"ms":10}"#));
    assert_eq!(router.metrics().ignored, 1);
    assert_eq!(router.metrics().dropped, 0);
}

#[test]
fn latency_updates_connection_and_summary_only() {
    let mut router = Router::new();
    let before = router.dashboard().clone();

    assert!(router.handle_message("amr/latency", r#"{"ms":250}"#));

    let dashboard = router.dashboard();
    assert_eq!(dashboard.connection.latency_ms, Some(250));
    assert_eq!(dashboard.summary.latency_ms, 250);
    assert_eq!(dashboard.summary.uptime_rate, before.summary.uptime_rate);
    assert_eq!(dashboard.summary.alarms, before.summary.alarms);
    assert_eq!(dashboard.robots, before.robots);
    assert_eq!(dashboard.events, before.events);
    assert_eq!(dashboard.jobs, before.jobs);
    assert_eq!(dashboard.batteries, before.batteries);
}

#[test]
fn envelope_replaces_robot_list_end_to_end() {
    let mut router = Router::new();
    let body = r#"{"type":"robots","payload":[{"id":"AMR-09","state":"RUN","bat":"50%","job":"x","t":"00:00"}]}"#;
    assert!(router.handle_message("amr/robots", body));

    assert_eq!(router.dashboard().robots.len(), 1);
    assert_eq!(router.dashboard().robots[0].id, "AMR-09");
    assert_eq!(router.metrics().applied, 1);
}
