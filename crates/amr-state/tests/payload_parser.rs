use amr_state::payload::{parse_payload, OneOrMany, Payload, Topic};
use amr_state::types::Severity;

#[test]
fn malformed_body_yields_no_message() {
    for body in ["", "not json", "{", "[1,2", "\"text\"", "42", "true", "null"] {
        for topic in Topic::ALL {
            assert!(
                parse_payload(topic.name(), body).is_none(),
                "body {body:?} on {} should be dropped",
                topic.name()
            );
        }
    }
}

#[test]
fn unknown_topic_yields_no_message() {
    let body = r#"{"id":"AMR-09","state":"RUN","bat":"50%","job":"x","t":"00:00"}"#;
    assert!(parse_payload("amr/unknown", body).is_none());
    assert!(parse_payload("other/robots", body).is_none());
    assert!(parse_payload("", body).is_none());
}

#[test]
fn bare_object_dispatches_by_topic() {
    let parsed = parse_payload(
        "amr/robots",
        r#"{"id":"AMR-09","state":"RUN","bat":"50%","job":"x","t":"00:00"}"#,
    );
    match parsed {
        Some(Payload::Robots(OneOrMany::One(robot))) => {
            assert_eq!(robot.id, "AMR-09");
            assert_eq!(robot.state, "RUN");
        }
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn bare_array_dispatches_by_topic() {
    let parsed = parse_payload(
        "amr/events",
        r#"[{"t":"00:01","type":"CRIT","msg":"m","robot":"AMR-01"}]"#,
    );
    match parsed {
        Some(Payload::Events(OneOrMany::Many(events))) => {
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].severity, Severity::Crit);
            assert_eq!(events[0].status, None);
        }
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn envelope_overrides_topic() {
    // A robots envelope arriving on the events topic still decodes as robots.
    let parsed = parse_payload(
        "amr/events",
        r#"{"type":"robots","payload":[{"id":"AMR-09","state":"RUN","bat":"50%","job":"x","t":"00:00"}]}"#,
    );
    match parsed {
        Some(Payload::Robots(OneOrMany::Many(robots))) => {
            assert_eq!(robots.len(), 1);
            assert_eq!(robots[0].id, "AMR-09");
        }
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn envelope_with_unknown_tag_is_rejected() {
    let parsed = parse_payload("amr/robots", r#"{"type":"telemetry","payload":{"v":1}}"#);
    assert!(parsed.is_none());
}

#[test]
fn envelope_with_malformed_payload_is_rejected() {
    let parsed = parse_payload("amr/robots", r#"{"type":"robots","payload":{"id":"AMR-01"}}"#);
    assert!(parsed.is_none());
}

#[test]
fn bare_value_must_fit_topic_shape() {
    // A robot row is not an event; on the events topic it is dropped.
    let parsed = parse_payload(
        "amr/events",
        r#"{"id":"AMR-09","state":"RUN","bat":"50%","job":"x","t":"00:00"}"#,
    );
    assert!(parsed.is_none());
}

#[test]
fn summary_accepts_partial_fields() {
    let parsed = parse_payload("amr/summary", r#"{"alarms":{"crit":1}}"#);
    match parsed {
        Some(Payload::Summary(patch)) => {
            let alarms = patch.alarms.expect("alarms present");
            assert_eq!(alarms.crit, Some(1));
            assert_eq!(alarms.warn, None);
            assert_eq!(patch.uptime_rate, None);
        }
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn latency_shape() {
    let parsed = parse_payload("amr/latency", r#"{"ms":250}"#);
    match parsed {
        Some(Payload::Latency(latency)) => assert_eq!(latency.ms, 250),
        other => panic!("unexpected parse result: {other:?}"),
    }
    assert!(parse_payload("amr/latency", r#"{"latency":250}"#).is_none());
}

#[test]
fn topic_names_round_trip() {
    for topic in Topic::ALL {
        assert_eq!(Topic::parse(topic.name()), Some(topic));
        assert!(topic.name().starts_with("amr/"));
    }
}
