//! Locale tables.
//!
//! UI chrome is translated through [`text`] with a fixed key set; live data
//! strings (job names, result labels) go through [`translate_data`], which
//! maps the known Korean vocabulary to English and back and leaves unknown
//! strings untouched.

#![allow(missing_docs)]

use crate::permissions::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Locale::Ko => Locale::En,
            Locale::En => Locale::Ko,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Locale::Ko => "KR",
            Locale::En => "EN",
        }
    }
}

/// Translate a UI chrome key. Missing keys fall back to the other locale,
/// then to the key itself.
#[must_use]
pub fn text(locale: Locale, key: &'static str) -> &'static str {
    let primary = match locale {
        Locale::Ko => lookup_ko(key),
        Locale::En => lookup_en(key),
    };
    primary
        .or_else(|| lookup_ko(key))
        .or_else(|| lookup_en(key))
        .unwrap_or(key)
}

#[must_use]
pub fn role_label(locale: Locale, role: Role) -> &'static str {
    match (locale, role) {
        (Locale::Ko, Role::Viewer) => "뷰어",
        (Locale::Ko, Role::Operator) => "작업자",
        (Locale::Ko, Role::Admin) => "관리자",
        (Locale::En, Role::Viewer) => "Viewer",
        (Locale::En, Role::Operator) => "Operator",
        (Locale::En, Role::Admin) => "Admin",
    }
}

/// Translate a known data string between locales; identity for anything
/// outside the fixed vocabulary.
#[must_use]
pub fn translate_data(value: &str, locale: Locale) -> &str {
    let mapped = match locale {
        Locale::En => ko_to_en(value),
        Locale::Ko => en_to_ko(value),
    };
    mapped.unwrap_or(value)
}

fn ko_to_en(value: &str) -> Option<&'static str> {
    Some(match value {
        "지연 증가(>200ms)" => "Latency increase (>200ms)",
        "미션 시작" => "Mission started",
        "구역 A 진입" => "Entered zone A",
        "확인 필요" => "Needs review",
        "정상" => "Normal",
        "픽업 → 드롭" => "Pickup → Drop",
        "검사 라인 이동" => "Move to inspection line",
        "충전 스테이션" => "Charging station",
        "라인A→라인B" => "Line A → Line B",
        "창고→포장" => "Warehouse → Packing",
        "라인C→검사" => "Line C → Inspection",
        "완료" => "Complete",
        "점검" => "Inspection",
        "픽업(노드 21) → 드롭(노드 07)" => "Pickup (Node 21) → Drop (Node 07)",
        "구역" => "Zone",
        _ => return None,
    })
}

fn en_to_ko(value: &str) -> Option<&'static str> {
    Some(match value {
        "Latency increase (>200ms)" => "지연 증가(>200ms)",
        "Mission started" => "미션 시작",
        "Entered zone A" => "구역 A 진입",
        "Needs review" => "확인 필요",
        "Normal" => "정상",
        "Pickup → Drop" => "픽업 → 드롭",
        "Move to inspection line" => "검사 라인 이동",
        "Charging station" => "충전 스테이션",
        "Line A → Line B" => "라인A→라인B",
        "Warehouse → Packing" => "창고→포장",
        "Line C → Inspection" => "라인C→검사",
        "Complete" => "완료",
        "Inspection" => "점검",
        "Pickup (Node 21) → Drop (Node 07)" => "픽업(노드 21) → 드롭(노드 07)",
        "Zone" => "구역",
        _ => return None,
    })
}

fn lookup_ko(key: &str) -> Option<&'static str> {
    Some(match key {
        "header.title" => "AMR 실시간 운영 대시보드",
        "header.connection" => "연결",
        "header.latency" => "지연",
        "header.lastUpdate" => "마지막 업데이트",
        "label.user" => "사용자",
        "tab.home" => "홈",
        "tab.robot" => "로봇 상태",
        "tab.job" => "작업 이력",
        "tab.battery" => "배터리 정보",
        "tab.map" => "지도",
        "tab.wireless" => "무선 진단",
        "tab.api" => "API & 다운로드",
        "section.summary" => "운영 요약",
        "section.summaryRange" => "최근 2시간",
        "section.events" => "최근 이벤트",
        "section.eventsHint" => "최신순",
        "section.robotStatus" => "개별 로봇 상태",
        "section.jobList" => "세그먼트 & 작업",
        "section.jobRecent" => "최근 50건",
        "section.batteryInventory" => "배터리 인벤토리",
        "section.batteryByRobot" => "로봇별 상태",
        "section.mapRobot" => "로봇 상태",
        "section.mapRealtime" => "초단위 갱신",
        "section.wireless" => "무선 진단",
        "section.wirelessHint" => "Signal / Ping / BSSID / Roams",
        "section.spot" => "Spot Details",
        "section.spotHint" => "선택 지점 정보",
        "section.api" => "API",
        "section.apiHint" => "문서/테스트",
        "section.download" => "다운로드",
        "section.downloadHint" => "PNG/CSV/JSON",
        "section.downloadNote" => "정보 영역 / 전체 그래프 다운로드 지원",
        "section.admin" => "관리자 메뉴",
        "section.adminHint" => "권한 설정",
        "admin.control" => "조작 가능",
        "admin.download" => "다운로드",
        "admin.noPermission" => "권한 없음",
        "admin.rolePermissionSuffix" => "권한",
        "admin.note" => "관리자 권한은 고정이며, 변경 사항은 로컬에 저장됩니다.",
        "metric.uptime" => "가동률",
        "metric.uptimeSub" => "최근 24시간 평균",
        "metric.activeRobots" => "활성 로봇",
        "metric.totalRobots" => "전체",
        "metric.activeJobs" => "진행 작업",
        "metric.avgJob" => "평균",
        "metric.alarm" => "알람",
        "metric.alarmSub" => "주의",
        "metric.alarmSubCrit" => "위험",
        "metric.latency" => "지연",
        "metric.latencySub" => "네트워크 RTT",
        "metric.energy" => "에너지",
        "metric.energySub" => "가중 평균 배터리",
        "metric.running" => "작업 중",
        "metric.idle" => "대기",
        "metric.charging" => "충전 중",
        "metric.immediateCheck" => "즉시 확인",
        "label.time" => "시간",
        "label.job" => "작업",
        "label.result" => "결과",
        "label.duration" => "소요",
        "label.state" => "상태",
        "label.battery" => "배터리",
        "label.temp" => "온도",
        "label.cycle" => "사이클",
        "label.robot" => "로봇",
        "label.coordinates" => "좌표",
        "label.baseStation" => "기지국",
        "label.channel" => "채널 6",
        "label.signal" => "신호",
        "label.ping" => "핑",
        "label.currentPoint" => "현재 포인트",
        "label.qualityGood" => "품질 양호",
        "label.rtt" => "RTT",
        "label.mission" => "미션",
        "label.mapState" => "상태",
        "label.lastUpdate" => "마지막 업데이트",
        "label.angle" => "각도",
        "label.speed" => "속도",
        "label.checkNeeded" => "확인 필요",
        "unit.robots" => "대",
        "unit.jobs" => "건",
        "unit.count" => "건",
        "unit.minutes" => "분",
        "time.secondsAgo" => "{s}s 전",
        "error.mqttMissing" => "AMR_MQTT_URL 미설정",
        "footer.feed" => "피드",
        "footer.keys" => "1-7 탭 · ←/→ 이동 · l 언어 · o/a 로그인 · x 로그아웃 · q 종료",
        "footer.adminKeys" => "↑/↓ 선택 · Enter 토글 · v/p 대상 역할",
        _ => return None,
    })
}

fn lookup_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "header.title" => "AMR Real-time Operations Dashboard",
        "header.connection" => "Connection",
        "header.latency" => "Latency",
        "header.lastUpdate" => "Last update",
        "label.user" => "User",
        "tab.home" => "Home",
        "tab.robot" => "Robot Status",
        "tab.job" => "Job History",
        "tab.battery" => "Battery Info",
        "tab.map" => "Map",
        "tab.wireless" => "Wireless",
        "tab.api" => "API & Download",
        "section.summary" => "Operations summary",
        "section.summaryRange" => "Last 2 hours",
        "section.events" => "Recent events",
        "section.eventsHint" => "Newest first",
        "section.robotStatus" => "Robot status",
        "section.jobList" => "Segments & jobs",
        "section.jobRecent" => "Last 50",
        "section.batteryInventory" => "Battery inventory",
        "section.batteryByRobot" => "By robot",
        "section.mapRobot" => "Robot status",
        "section.mapRealtime" => "Updated per second",
        "section.wireless" => "Wireless diagnostics",
        "section.wirelessHint" => "Signal / Ping / BSSID / Roams",
        "section.spot" => "Spot details",
        "section.spotHint" => "Selected spot info",
        "section.api" => "API",
        "section.apiHint" => "Docs / Test",
        "section.download" => "Download",
        "section.downloadHint" => "PNG / CSV / JSON",
        "section.downloadNote" => "Download support for information area / all graphs",
        "section.admin" => "Admin menu",
        "section.adminHint" => "Permission settings",
        "admin.control" => "Allow control",
        "admin.download" => "Download",
        "admin.noPermission" => "No access",
        "admin.rolePermissionSuffix" => "Permissions",
        "admin.note" => "Admin permissions are fixed. Changes are saved locally.",
        "metric.uptime" => "Uptime",
        "metric.uptimeSub" => "Last 24h average",
        "metric.activeRobots" => "Active robots",
        "metric.totalRobots" => "Total",
        "metric.activeJobs" => "Active jobs",
        "metric.avgJob" => "Avg",
        "metric.alarm" => "Alarms",
        "metric.alarmSub" => "Warn",
        "metric.alarmSubCrit" => "Crit",
        "metric.latency" => "Latency",
        "metric.latencySub" => "Network RTT",
        "metric.energy" => "Energy",
        "metric.energySub" => "Weighted battery average",
        "metric.running" => "Running",
        "metric.idle" => "Idle",
        "metric.charging" => "Charging",
        "metric.immediateCheck" => "Immediate action",
        "label.time" => "Time",
        "label.job" => "Job",
        "label.result" => "Result",
        "label.duration" => "Duration",
        "label.state" => "State",
        "label.battery" => "Battery",
        "label.temp" => "Temp",
        "label.cycle" => "Cycle",
        "label.robot" => "Robot",
        "label.coordinates" => "Coordinates",
        "label.baseStation" => "Base station",
        "label.channel" => "Channel 6",
        "label.signal" => "Signal",
        "label.ping" => "Ping",
        "label.currentPoint" => "Current point",
        "label.qualityGood" => "Good quality",
        "label.rtt" => "RTT",
        "label.mission" => "Mission",
        "label.mapState" => "State",
        "label.lastUpdate" => "Last update",
        "label.angle" => "Angle",
        "label.speed" => "Speed",
        "label.checkNeeded" => "Needs review",
        "unit.robots" => "robots",
        "unit.jobs" => "jobs",
        "unit.count" => "count",
        "unit.minutes" => "min",
        "time.secondsAgo" => "{s}s ago",
        "error.mqttMissing" => "AMR_MQTT_URL not set",
        "footer.feed" => "Feed",
        "footer.keys" => "1-7 tabs · ←/→ move · l locale · o/a login · x logout · q quit",
        "footer.adminKeys" => "↑/↓ select · Enter toggle · v/p target role",
        _ => return None,
    })
}
