//! The dashboard snapshot and its reducer.

#![allow(missing_docs)]

use crate::connection::ConnectionState;
use crate::merge::{
    merge_map, merge_summary, prepend_capped, replace_capped, upsert_by_id, EVENT_CAPACITY,
    LIST_CAPACITY,
};
use crate::payload::{OneOrMany, Payload};
use crate::types::{
    AlarmCounts, BatteryItem, EventItem, JobHistoryItem, MapStatus, RobotStatusItem, Severity,
    SummaryMetrics,
};

/// The whole view state, one slice per data category.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: SummaryMetrics,
    pub events: Vec<EventItem>,
    pub robots: Vec<RobotStatusItem>,
    pub jobs: Vec<JobHistoryItem>,
    pub batteries: Vec<BatteryItem>,
    pub map: MapStatus,
    pub connection: ConnectionState,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            summary: seed_summary(),
            events: seed_events(),
            robots: seed_robots(),
            jobs: seed_jobs(),
            batteries: seed_batteries(),
            map: seed_map(),
            connection: ConnectionState::default(),
        }
    }
}

impl Dashboard {
    /// Fold one decoded payload into the snapshot.
    ///
    /// Sequence payloads replace their list verbatim (truncated to the
    /// retention cap); single items are prepended or upserted. The latency
    /// payload updates both the connection slice and the summary slice.
    pub fn apply(&mut self, payload: Payload) {
        match payload {
            Payload::Summary(patch) => {
                self.summary = merge_summary(&self.summary, &patch);
            }
            Payload::Events(OneOrMany::Many(events)) => {
                self.events = replace_capped(events, EVENT_CAPACITY);
            }
            Payload::Events(OneOrMany::One(event)) => {
                self.events = prepend_capped(&self.events, event, EVENT_CAPACITY);
            }
            Payload::Robots(OneOrMany::Many(robots)) => {
                self.robots = replace_capped(robots, LIST_CAPACITY);
            }
            Payload::Robots(OneOrMany::One(robot)) => {
                self.robots = upsert_by_id(&self.robots, robot, LIST_CAPACITY);
            }
            Payload::Jobs(OneOrMany::Many(jobs)) => {
                self.jobs = replace_capped(jobs, LIST_CAPACITY);
            }
            Payload::Jobs(OneOrMany::One(job)) => {
                self.jobs = prepend_capped(&self.jobs, job, LIST_CAPACITY);
            }
            Payload::Battery(OneOrMany::Many(batteries)) => {
                self.batteries = replace_capped(batteries, LIST_CAPACITY);
            }
            Payload::Battery(OneOrMany::One(battery)) => {
                self.batteries = upsert_by_id(&self.batteries, battery, LIST_CAPACITY);
            }
            Payload::Map(patch) => {
                self.map = merge_map(&self.map, &patch);
            }
            Payload::Latency(latency) => {
                self.connection.latency_ms = Some(latency.ms);
                self.summary.latency_ms = latency.ms;
            }
        }
    }
}

fn seed_summary() -> SummaryMetrics {
    SummaryMetrics {
        uptime_rate: 92.0,
        active_robots: 18,
        total_robots: 20,
        active_jobs: 36,
        avg_job_minutes: 4.2,
        alarms: AlarmCounts { warn: 2, crit: 0 },
        latency_ms: 120,
        energy_pct: 78,
    }
}

fn seed_events() -> Vec<EventItem> {
    vec![
        event("14:12:08", Severity::Warn, "지연 증가(>200ms)", "AMR-03", Some("확인 필요")),
        event("14:10:21", Severity::Info, "미션 시작", "AMR-03", Some("정상")),
        event("14:08:55", Severity::Info, "구역 A 진입", "AMR-03", Some("정상")),
    ]
}

fn seed_robots() -> Vec<RobotStatusItem> {
    vec![
        robot("AMR-01", "RUN", "82%", "픽업 → 드롭", "14:12:10"),
        robot("AMR-02", "IDLE", "64%", "-", "14:12:02"),
        robot("AMR-03", "RUN", "75%", "검사 라인 이동", "14:11:58"),
        robot("AMR-04", "CHARGE", "31%", "충전 스테이션", "14:11:40"),
    ]
}

fn seed_jobs() -> Vec<JobHistoryItem> {
    vec![
        job("14:10", "라인A→라인B", "AMR-01", "3m 40s", "완료"),
        job("14:08", "창고→포장", "AMR-03", "4m 02s", "완료"),
        job("14:06", "라인C→검사", "AMR-02", "2m 55s", "완료"),
    ]
}

fn seed_batteries() -> Vec<BatteryItem> {
    vec![
        battery("AMR-01", "82%", "32°C", "412", "정상"),
        battery("AMR-02", "64%", "35°C", "389", "정상"),
        battery("AMR-03", "75%", "37°C", "465", "점검"),
    ]
}

fn seed_map() -> MapStatus {
    MapStatus {
        x: 12.34,
        y: 8.21,
        heading: 275.0,
        speed: 1.2,
        mission: "픽업(노드 21) → 드롭(노드 07)".into(),
        state: "RUN".into(),
    }
}

fn event(
    t: &str,
    severity: Severity,
    msg: &str,
    robot: &str,
    status: Option<&str>,
) -> EventItem {
    EventItem {
        t: t.into(),
        severity,
        msg: msg.into(),
        robot: robot.into(),
        status: status.map(Into::into),
    }
}

fn robot(id: &str, state: &str, bat: &str, job: &str, t: &str) -> RobotStatusItem {
    RobotStatusItem {
        id: id.into(),
        state: state.into(),
        bat: bat.into(),
        job: job.into(),
        t: t.into(),
    }
}

fn job(t: &str, job: &str, robot: &str, d: &str, r: &str) -> JobHistoryItem {
    JobHistoryItem {
        t: t.into(),
        job: job.into(),
        robot: robot.into(),
        d: d.into(),
        r: r.into(),
    }
}

fn battery(id: &str, soc: &str, temp: &str, cycle: &str, state: &str) -> BatteryItem {
    BatteryItem {
        id: id.into(),
        soc: soc.into(),
        temp: temp.into(),
        cycle: cycle.into(),
        state: state.into(),
    }
}
