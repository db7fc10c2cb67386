use amr_state::merge::{EVENT_CAPACITY, LIST_CAPACITY};
use amr_state::payload::{OneOrMany, Payload};
use amr_state::types::{
    AlarmPatch, BatteryItem, EventItem, JobHistoryItem, MapPatch, RobotStatusItem, Severity,
    SummaryPatch,
};
use amr_state::Dashboard;

fn robot(id: &str, state: &str, bat: &str) -> RobotStatusItem {
    RobotStatusItem {
        id: id.into(),
        state: state.into(),
        bat: bat.into(),
        job: "-".into(),
        t: "00:00".into(),
    }
}

fn event(msg: &str) -> EventItem {
    EventItem {
        t: "00:01".into(),
        severity: Severity::Info,
        msg: msg.into(),
        robot: "AMR-01".into(),
        status: None,
    }
}

fn job(t: &str) -> JobHistoryItem {
    JobHistoryItem {
        t: t.into(),
        job: "라인A→라인B".into(),
        robot: "AMR-01".into(),
        d: "1m".into(),
        r: "완료".into(),
    }
}

#[test]
fn summary_partial_merge_touches_only_named_fields() {
    let mut dashboard = Dashboard::default();
    let before = dashboard.summary.clone();

    dashboard.apply(Payload::Summary(SummaryPatch {
        alarms: Some(AlarmPatch {
            crit: Some(1),
            warn: None,
        }),
        ..SummaryPatch::default()
    }));

    assert_eq!(dashboard.summary.alarms.crit, 1);
    assert_eq!(dashboard.summary.alarms.warn, before.alarms.warn);
    assert_eq!(dashboard.summary.uptime_rate, before.uptime_rate);
    assert_eq!(dashboard.summary.active_robots, before.active_robots);
    assert_eq!(dashboard.summary.latency_ms, before.latency_ms);
}

#[test]
fn sequence_payload_replaces_robot_list_verbatim() {
    let mut dashboard = Dashboard::default();
    assert!(dashboard.robots.len() > 1);

    dashboard.apply(Payload::Robots(OneOrMany::Many(vec![robot(
        "AMR-09", "RUN", "50%",
    )])));

    assert_eq!(dashboard.robots.len(), 1);
    assert_eq!(dashboard.robots[0].id, "AMR-09");
}

#[test]
fn repeated_upserts_with_same_id_keep_length_and_position() {
    let mut dashboard = Dashboard::default();
    dashboard.apply(Payload::Robots(OneOrMany::Many(vec![
        robot("AMR-01", "RUN", "80%"),
        robot("AMR-02", "IDLE", "60%"),
        robot("AMR-03", "RUN", "70%"),
    ])));

    for bat in ["59%", "58%", "57%"] {
        dashboard.apply(Payload::Robots(OneOrMany::One(robot("AMR-02", "CHARGE", bat))));
    }

    assert_eq!(dashboard.robots.len(), 3);
    assert_eq!(dashboard.robots[1].id, "AMR-02");
    assert_eq!(dashboard.robots[1].state, "CHARGE");
    assert_eq!(dashboard.robots[1].bat, "57%");
    assert_eq!(dashboard.robots[0].id, "AMR-01");
    assert_eq!(dashboard.robots[2].id, "AMR-03");
}

#[test]
fn unknown_id_upsert_prepends() {
    let mut dashboard = Dashboard::default();
    dashboard.apply(Payload::Robots(OneOrMany::Many(vec![robot(
        "AMR-01", "RUN", "80%",
    )])));

    dashboard.apply(Payload::Robots(OneOrMany::One(robot("AMR-05", "IDLE", "90%"))));

    assert_eq!(dashboard.robots.len(), 2);
    assert_eq!(dashboard.robots[0].id, "AMR-05");
}

#[test]
fn battery_upserts_by_id() {
    let mut dashboard = Dashboard::default();
    let before = dashboard.batteries.len();

    dashboard.apply(Payload::Battery(OneOrMany::One(BatteryItem {
        id: "AMR-02".into(),
        soc: "41%".into(),
        temp: "39°C".into(),
        cycle: "390".into(),
        state: "점검".into(),
    })));

    assert_eq!(dashboard.batteries.len(), before);
    assert_eq!(dashboard.batteries[1].id, "AMR-02");
    assert_eq!(dashboard.batteries[1].soc, "41%");
}

#[test]
fn events_never_exceed_capacity() {
    let mut dashboard = Dashboard::default();
    for index in 0..(EVENT_CAPACITY * 3) {
        dashboard.apply(Payload::Events(OneOrMany::One(event(&format!("e{index}")))));
    }
    assert_eq!(dashboard.events.len(), EVENT_CAPACITY);
    // Newest first, oldest evicted.
    assert_eq!(dashboard.events[0].msg, format!("e{}", EVENT_CAPACITY * 3 - 1));
}

#[test]
fn event_prepend_at_capacity_evicts_tail() {
    let mut dashboard = Dashboard::default();
    let full: Vec<EventItem> = (0..EVENT_CAPACITY)
        .map(|index| event(&format!("e{index}")))
        .collect();
    dashboard.apply(Payload::Events(OneOrMany::Many(full)));

    dashboard.apply(Payload::Events(OneOrMany::One(event("newest"))));

    assert_eq!(dashboard.events.len(), EVENT_CAPACITY);
    assert_eq!(dashboard.events[0].msg, "newest");
    assert_eq!(dashboard.events[1].msg, "e0");
    assert_eq!(
        dashboard.events.last().map(|entry| entry.msg.as_str()),
        Some(format!("e{}", EVENT_CAPACITY - 2).as_str())
    );
}

#[test]
fn jobs_never_exceed_capacity() {
    let mut dashboard = Dashboard::default();
    for index in 0..(LIST_CAPACITY + 10) {
        dashboard.apply(Payload::Jobs(OneOrMany::One(job(&format!("t{index}")))));
    }
    assert_eq!(dashboard.jobs.len(), LIST_CAPACITY);
    assert_eq!(dashboard.jobs[0].t, format!("t{}", LIST_CAPACITY + 9));
}

#[test]
fn sequence_replacement_is_truncated_to_capacity() {
    let mut dashboard = Dashboard::default();
    let oversized: Vec<EventItem> = (0..(EVENT_CAPACITY + 5))
        .map(|index| event(&format!("e{index}")))
        .collect();
    dashboard.apply(Payload::Events(OneOrMany::Many(oversized)));
    assert_eq!(dashboard.events.len(), EVENT_CAPACITY);
    assert_eq!(dashboard.events[0].msg, "e0");
}

#[test]
fn map_merge_overlays_partial_fields() {
    let mut dashboard = Dashboard::default();
    let before = dashboard.map.clone();

    dashboard.apply(Payload::Map(MapPatch {
        x: Some(1.5),
        speed: Some(0.4),
        ..MapPatch::default()
    }));

    assert_eq!(dashboard.map.x, 1.5);
    assert_eq!(dashboard.map.speed, 0.4);
    assert_eq!(dashboard.map.y, before.y);
    assert_eq!(dashboard.map.heading, before.heading);
    assert_eq!(dashboard.map.mission, before.mission);
}

#[test]
fn reapplying_the_same_delta_is_idempotent() {
    let mut dashboard = Dashboard::default();
    dashboard.apply(Payload::Robots(OneOrMany::One(robot("AMR-07", "RUN", "33%"))));
    let once = dashboard.robots.clone();
    dashboard.apply(Payload::Robots(OneOrMany::One(robot("AMR-07", "RUN", "33%"))));
    assert_eq!(dashboard.robots, once);
}
