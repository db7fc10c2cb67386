//! Pure merge helpers.
//!
//! Each helper takes the previous snapshot plus an incoming value and
//! returns the next snapshot. List helpers enforce the retention caps.

#![allow(missing_docs)]

use crate::types::{Keyed, MapPatch, MapStatus, SummaryMetrics, SummaryPatch};

/// Recent events keep at most this many entries.
pub const EVENT_CAPACITY: usize = 20;
/// Robot, job and battery lists keep at most this many entries.
pub const LIST_CAPACITY: usize = 50;

/// Overlay present patch fields onto the previous summary. The nested alarm
/// counts are merged one level deep.
#[must_use]
pub fn merge_summary(prev: &SummaryMetrics, patch: &SummaryPatch) -> SummaryMetrics {
    let mut next = prev.clone();
    if let Some(uptime_rate) = patch.uptime_rate {
        next.uptime_rate = uptime_rate;
    }
    if let Some(active_robots) = patch.active_robots {
        next.active_robots = active_robots;
    }
    if let Some(total_robots) = patch.total_robots {
        next.total_robots = total_robots;
    }
    if let Some(active_jobs) = patch.active_jobs {
        next.active_jobs = active_jobs;
    }
    if let Some(avg_job_minutes) = patch.avg_job_minutes {
        next.avg_job_minutes = avg_job_minutes;
    }
    if let Some(alarms) = patch.alarms {
        if let Some(warn) = alarms.warn {
            next.alarms.warn = warn;
        }
        if let Some(crit) = alarms.crit {
            next.alarms.crit = crit;
        }
    }
    if let Some(latency_ms) = patch.latency_ms {
        next.latency_ms = latency_ms;
    }
    if let Some(energy_pct) = patch.energy_pct {
        next.energy_pct = energy_pct;
    }
    next
}

/// Overlay present patch fields onto the previous map status.
#[must_use]
pub fn merge_map(prev: &MapStatus, patch: &MapPatch) -> MapStatus {
    let mut next = prev.clone();
    if let Some(x) = patch.x {
        next.x = x;
    }
    if let Some(y) = patch.y {
        next.y = y;
    }
    if let Some(heading) = patch.heading {
        next.heading = heading;
    }
    if let Some(speed) = patch.speed {
        next.speed = speed;
    }
    if let Some(mission) = &patch.mission {
        next.mission = mission.clone();
    }
    if let Some(state) = &patch.state {
        next.state = state.clone();
    }
    next
}

/// Prepend `item`, evicting the oldest (tail) entries beyond `cap`.
#[must_use]
pub fn prepend_capped<T: Clone>(list: &[T], item: T, cap: usize) -> Vec<T> {
    let mut next = Vec::with_capacity(list.len().min(cap.saturating_sub(1)) + 1);
    next.push(item);
    next.extend(list.iter().take(cap.saturating_sub(1)).cloned());
    next
}

/// Replace the whole list, truncated to `cap`.
#[must_use]
pub fn replace_capped<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    items.truncate(cap);
    items
}

/// Update the entry matching `item`'s id in place (position preserved), or
/// prepend a new entry under the cap.
#[must_use]
pub fn upsert_by_id<T: Keyed + Clone>(list: &[T], item: T, cap: usize) -> Vec<T> {
    match list.iter().position(|entry| entry.key() == item.key()) {
        Some(index) => {
            let mut next = list.to_vec();
            next[index] = item;
            next
        }
        None => prepend_capped(list, item, cap),
    }
}
