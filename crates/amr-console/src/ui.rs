//! Terminal UI.
//!
//! One loop on the UI thread: drain the feed channel into the router, draw
//! the current snapshot, handle keys. The periodic redraw only refreshes
//! the displayed "seconds since last message" value; it never merges state.

#![allow(missing_docs)]

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Terminal,
};
use time::OffsetDateTime;

use amr_state::types::Severity;
use amr_state::{ConnectionStatus, Router, TransportEvent};

use crate::error::ConsoleError;
use crate::feed::FeedEvent;
use crate::i18n::{role_label, text, translate_data, Locale};
use crate::permissions::{PermissionsConfig, PermissionsStore, Role, TabKey};

use ratatui::style::Color;

const COLOR_GREEN: Color = Color::Rgb(46, 204, 113);
const COLOR_AMBER: Color = Color::Rgb(243, 156, 18);
const COLOR_RED: Color = Color::Rgb(239, 49, 36);
const COLOR_GRAY: Color = Color::Rgb(142, 142, 147);
const COLOR_ACCENT: Color = Color::Rgb(239, 49, 36);
const COLOR_TEXT: Color = Color::Rgb(229, 229, 234);

/// Rows in the admin permission editor: seven tabs plus two capabilities.
const ADMIN_ROWS: usize = TabKey::ALL.len() + 2;

#[derive(Debug, Clone, Copy)]
pub struct UiOptions {
    pub locale: Locale,
    pub refresh: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            refresh: Duration::from_millis(250),
        }
    }
}

struct ConsoleApp {
    router: Router,
    events: Option<Receiver<FeedEvent>>,
    store: PermissionsStore,
    permissions: PermissionsConfig,
    role: Role,
    locale: Locale,
    tab: TabKey,
    admin_role: Role,
    admin_cursor: usize,
}

impl ConsoleApp {
    fn visible_tabs(&self) -> Vec<TabKey> {
        let allowed = self.permissions.effective(self.role);
        TabKey::ALL
            .into_iter()
            .filter(|tab| allowed.allows(*tab))
            .collect()
    }

    fn clamp_tab(&mut self) {
        let visible = self.visible_tabs();
        if !visible.contains(&self.tab) {
            if let Some(first) = visible.first() {
                self.tab = *first;
            }
        }
    }

    fn drain_feed(&mut self) {
        let pending: Vec<FeedEvent> = match &self.events {
            Some(events) => events.try_iter().collect(),
            None => return,
        };
        for event in pending {
            match event {
                FeedEvent::Connected => self.router.handle_transport(TransportEvent::Connected),
                FeedEvent::Reconnecting => {
                    self.router.handle_transport(TransportEvent::Connecting);
                }
                FeedEvent::Disconnected => {
                    self.router.handle_transport(TransportEvent::Disconnected);
                }
                FeedEvent::Error(message) => {
                    self.router.handle_transport(TransportEvent::Error(message));
                }
                FeedEvent::Message { topic, body } => {
                    self.router.handle_message(&topic, &body);
                }
            }
        }
    }

    fn login(&mut self, role: Role) {
        self.role = role;
        self.clamp_tab();
    }

    fn select_tab(&mut self, index: usize) {
        if let Some(tab) = self.visible_tabs().get(index) {
            self.tab = *tab;
        }
    }

    fn cycle_tab(&mut self, forward: bool) {
        let visible = self.visible_tabs();
        if visible.is_empty() {
            return;
        }
        let current = visible
            .iter()
            .position(|tab| *tab == self.tab)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % visible.len()
        } else {
            (current + visible.len() - 1) % visible.len()
        };
        self.tab = visible[next];
    }

    fn admin_toggle(&mut self) {
        if self.role != Role::Admin || self.tab != TabKey::Api {
            return;
        }
        let changed = if self.admin_cursor < TabKey::ALL.len() {
            self.permissions
                .toggle_tab(self.admin_role, TabKey::ALL[self.admin_cursor])
        } else if self.admin_cursor == TabKey::ALL.len() {
            let current = self.permissions.effective(self.admin_role).can_control;
            self.permissions.set_control(self.admin_role, !current)
        } else {
            let current = self.permissions.effective(self.admin_role).can_download;
            self.permissions.set_download(self.admin_role, !current)
        };
        if changed {
            if let Err(err) = self.store.save(&self.permissions) {
                tracing::warn!(error = %err, "failed to persist permissions");
            }
        }
    }

    /// Returns `true` when the session should end.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('l') => self.locale = self.locale.toggle(),
            KeyCode::Char('o') => self.login(Role::Operator),
            KeyCode::Char('a') => self.login(Role::Admin),
            KeyCode::Char('x') => self.login(Role::Viewer),
            KeyCode::Left => self.cycle_tab(false),
            KeyCode::Right | KeyCode::Tab => self.cycle_tab(true),
            KeyCode::Char(digit @ '1'..='7') => {
                let index = digit as usize - '1' as usize;
                self.select_tab(index);
            }
            KeyCode::Char('v') if self.role == Role::Admin => self.admin_role = Role::Viewer,
            KeyCode::Char('p') if self.role == Role::Admin => self.admin_role = Role::Operator,
            KeyCode::Up if self.tab == TabKey::Api => {
                self.admin_cursor = self.admin_cursor.saturating_sub(1);
            }
            KeyCode::Down if self.tab == TabKey::Api => {
                self.admin_cursor = (self.admin_cursor + 1).min(ADMIN_ROWS - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.admin_toggle(),
            _ => {}
        }
        false
    }
}

/// Run the console until the user quits. The router is handed back so the
/// caller can inspect final state in tests.
pub fn run_console(
    router: Router,
    events: Option<Receiver<FeedEvent>>,
    store: PermissionsStore,
    options: UiOptions,
) -> Result<Router, ConsoleError> {
    let permissions = store.load();
    let mut app = ConsoleApp {
        router,
        events,
        store,
        permissions,
        role: Role::Viewer,
        locale: options.locale,
        tab: TabKey::Home,
        admin_role: Role::Viewer,
        admin_cursor: 0,
    };
    app.clamp_tab();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result: Result<(), ConsoleError> = (|| {
        loop {
            app.drain_feed();
            terminal.draw(|frame| render(frame.area(), frame, &app))?;
            if event::poll(options.refresh)? {
                if let Event::Key(key) = event::read()? {
                    if app.handle_key(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result.map(|()| app.router)
}

fn label_style() -> Style {
    Style::default().fg(COLOR_GRAY)
}

fn value_style() -> Style {
    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
}

fn header_style() -> Style {
    Style::default().fg(COLOR_GRAY).add_modifier(Modifier::BOLD)
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(COLOR_GRAY),
        Severity::Warn => Style::default().fg(COLOR_AMBER),
        Severity::Crit => Style::default().fg(COLOR_RED),
    }
}

fn status_tone(status: ConnectionStatus) -> (&'static str, Style) {
    match status {
        ConnectionStatus::Connected => ("OK", Style::default().fg(COLOR_GREEN)),
        ConnectionStatus::Connecting => ("CONNECTING", Style::default().fg(COLOR_AMBER)),
        ConnectionStatus::Error => ("ERROR", Style::default().fg(COLOR_RED)),
        ConnectionStatus::Disconnected => ("OFF", Style::default().fg(COLOR_GRAY)),
    }
}

fn section_block(title: &str, hint: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title_top(Line::from(Span::styled(
            format!(" {title} "),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )))
        .title_top(Line::from(Span::styled(format!(" {hint} "), label_style())).right_aligned())
}

fn tab_key_label(locale: Locale, tab: TabKey) -> &'static str {
    match tab {
        TabKey::Home => text(locale, "tab.home"),
        TabKey::Robot => text(locale, "tab.robot"),
        TabKey::Job => text(locale, "tab.job"),
        TabKey::Battery => text(locale, "tab.battery"),
        TabKey::Map => text(locale, "tab.map"),
        TabKey::Wireless => text(locale, "tab.wireless"),
        TabKey::Api => text(locale, "tab.api"),
    }
}

fn last_update_label(app: &ConsoleApp) -> String {
    match app
        .router
        .dashboard()
        .connection
        .seconds_since_last_message()
    {
        Some(seconds) => {
            text(app.locale, "time.secondsAgo").replace("{s}", &seconds.to_string())
        }
        None => "-".to_string(),
    }
}

fn clock_label() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute()
    )
}

fn render(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);
    render_header(rows[0], frame, app);
    render_tabs(rows[1], frame, app);
    match app.tab {
        TabKey::Home => render_home(rows[2], frame, app),
        TabKey::Robot => render_robots(rows[2], frame, app),
        TabKey::Job => render_jobs(rows[2], frame, app),
        TabKey::Battery => render_batteries(rows[2], frame, app),
        TabKey::Map => render_map(rows[2], frame, app),
        TabKey::Wireless => render_wireless(rows[2], frame, app),
        TabKey::Api => render_api(rows[2], frame, app),
    }
    render_footer(rows[3], frame, app);
}

fn render_header(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let connection = &app.router.dashboard().connection;
    let (status_label, status_style) = status_tone(connection.status);
    let latency = connection
        .latency_ms
        .map_or_else(|| "-".to_string(), |ms| format!("{ms}ms"));

    let title = Line::from(vec![
        Span::styled(
            text(locale, "header.title"),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(clock_label(), label_style()),
        Span::raw("  "),
        Span::styled(locale.label(), label_style()),
    ]);

    let mut status = vec![
        Span::styled(format!("{}: ", text(locale, "header.connection")), label_style()),
        Span::styled(status_label, status_style),
        Span::styled(
            format!(" · {} {latency}", text(locale, "header.latency")),
            label_style(),
        ),
        Span::styled(
            format!(
                " · {} {}",
                text(locale, "header.lastUpdate"),
                last_update_label(app)
            ),
            label_style(),
        ),
        Span::styled(
            format!(
                " · {}: {}",
                text(locale, "label.user"),
                role_label(locale, app.role)
            ),
            label_style(),
        ),
    ];
    if let Some(error) = &connection.error {
        status.push(Span::styled(
            format!(" · {error}"),
            Style::default().fg(COLOR_RED),
        ));
    }

    frame.render_widget(Paragraph::new(vec![title, Line::from(status)]), area);
}

fn render_tabs(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let visible = app.visible_tabs();
    let titles: Vec<Line> = visible
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            Line::from(format!("{} {}", index + 1, tab_key_label(app.locale, *tab)))
        })
        .collect();
    let selected = visible.iter().position(|tab| *tab == app.tab).unwrap_or(0);
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(label_style())
            .highlight_style(
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

fn render_footer(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let metrics = app.router.metrics();
    let mut spans = vec![
        Span::styled(
            format!(
                "{}: rx {} · ok {} · drop {} · skip {}",
                text(locale, "footer.feed"),
                metrics.received,
                metrics.applied,
                metrics.dropped,
                metrics.ignored
            ),
            label_style(),
        ),
        Span::styled(format!("  |  {}", text(locale, "footer.keys")), label_style()),
    ];
    if app.role == Role::Admin && app.tab == TabKey::Api {
        spans.push(Span::styled(
            format!("  |  {}", text(locale, "footer.adminKeys")),
            label_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn metric_card(
    area: Rect,
    frame: &mut ratatui::Frame<'_>,
    label: &str,
    value: &str,
    unit: &str,
    sub: &str,
    tone: Option<Style>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(tone.unwrap_or_else(label_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::from(Span::styled(label.to_string(), label_style())),
        Line::from(vec![
            Span::styled(value.to_string(), value_style()),
            Span::styled(format!(" {unit}"), label_style()),
        ]),
        Line::from(Span::styled(sub.to_string(), label_style())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[allow(clippy::too_many_lines)]
fn render_home(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let summary = &app.router.dashboard().summary;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(rows[0]);

    metric_card(
        cards[0],
        frame,
        text(locale, "metric.uptime"),
        &format!("{:.0}", summary.uptime_rate),
        "%",
        text(locale, "metric.uptimeSub"),
        None,
    );
    metric_card(
        cards[1],
        frame,
        text(locale, "metric.activeRobots"),
        &summary.active_robots.to_string(),
        text(locale, "unit.robots"),
        &format!(
            "{} {} {}",
            text(locale, "metric.totalRobots"),
            summary.total_robots,
            text(locale, "unit.robots")
        ),
        None,
    );
    metric_card(
        cards[2],
        frame,
        text(locale, "metric.activeJobs"),
        &summary.active_jobs.to_string(),
        text(locale, "unit.jobs"),
        &format!(
            "{} {:.1} {}",
            text(locale, "metric.avgJob"),
            summary.avg_job_minutes,
            text(locale, "unit.minutes")
        ),
        None,
    );
    let alarm_tone = if summary.alarms.crit > 0 {
        Some(Style::default().fg(COLOR_RED))
    } else if summary.alarms.warn > 0 {
        Some(Style::default().fg(COLOR_AMBER))
    } else {
        None
    };
    metric_card(
        cards[3],
        frame,
        text(locale, "metric.alarm"),
        &(summary.alarms.warn + summary.alarms.crit).to_string(),
        text(locale, "unit.count"),
        &format!(
            "{} {} / {} {}",
            text(locale, "metric.alarmSub"),
            summary.alarms.warn,
            text(locale, "metric.alarmSubCrit"),
            summary.alarms.crit
        ),
        alarm_tone,
    );
    metric_card(
        cards[4],
        frame,
        text(locale, "metric.latency"),
        &summary.latency_ms.to_string(),
        "ms",
        text(locale, "metric.latencySub"),
        None,
    );
    metric_card(
        cards[5],
        frame,
        text(locale, "metric.energy"),
        &summary.energy_pct.to_string(),
        "%",
        text(locale, "metric.energySub"),
        None,
    );

    let block = section_block(
        text(locale, "section.events"),
        text(locale, "section.eventsHint"),
    );
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);
    let mut lines = Vec::new();
    for event in app
        .router
        .dashboard()
        .events
        .iter()
        .take(inner.height as usize)
    {
        let severity = match event.severity {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Crit => "CRIT",
        };
        let status = event
            .status
            .as_deref()
            .unwrap_or_else(|| text(locale, "label.checkNeeded"));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", event.t), label_style()),
            Span::styled(format!("{severity:<5}"), severity_style(event.severity)),
            Span::styled(format!("{:<8}", event.robot), value_style()),
            Span::raw(translate_data(&event.msg, locale).to_string()),
            Span::styled(
                format!("  ({})", translate_data(status, locale)),
                label_style(),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_robots(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let robots = &app.router.dashboard().robots;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    let counts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    let count = |state: &str| robots.iter().filter(|r| r.state == state).count();
    metric_card(
        counts[0],
        frame,
        "RUN",
        &count("RUN").to_string(),
        text(locale, "unit.robots"),
        text(locale, "metric.running"),
        Some(Style::default().fg(COLOR_GREEN)),
    );
    metric_card(
        counts[1],
        frame,
        "IDLE",
        &count("IDLE").to_string(),
        text(locale, "unit.robots"),
        text(locale, "metric.idle"),
        None,
    );
    metric_card(
        counts[2],
        frame,
        "CHARGE",
        &count("CHARGE").to_string(),
        text(locale, "unit.robots"),
        text(locale, "metric.charging"),
        None,
    );
    let error_count = count("ERROR");
    metric_card(
        counts[3],
        frame,
        "ERROR",
        &error_count.to_string(),
        text(locale, "unit.robots"),
        text(locale, "metric.immediateCheck"),
        (error_count > 0).then(|| Style::default().fg(COLOR_RED)),
    );

    let block = section_block(
        text(locale, "section.robotStatus"),
        text(locale, "section.mapRealtime"),
    );
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<9}", text(locale, "label.robot")), header_style()),
        Span::styled(format!("{:<8}", text(locale, "label.state")), header_style()),
        Span::styled(format!("{:<8}", text(locale, "label.battery")), header_style()),
        Span::styled(format!("{:<24}", text(locale, "label.job")), header_style()),
        Span::styled(text(locale, "label.lastUpdate"), header_style()),
    ])];
    for robot in robots.iter().take(inner.height.saturating_sub(1) as usize) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", robot.id), value_style()),
            Span::raw(format!("{:<8}", robot.state)),
            Span::raw(format!("{:<8}", robot.bat)),
            Span::raw(format!("{:<24}", translate_data(&robot.job, locale))),
            Span::styled(robot.t.clone(), label_style()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_jobs(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let block = section_block(
        text(locale, "section.jobList"),
        text(locale, "section.jobRecent"),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<7}", text(locale, "label.time")), header_style()),
        Span::styled(format!("{:<22}", text(locale, "label.job")), header_style()),
        Span::styled(format!("{:<9}", text(locale, "label.robot")), header_style()),
        Span::styled(format!("{:<9}", text(locale, "label.duration")), header_style()),
        Span::styled(text(locale, "label.result"), header_style()),
    ])];
    for job in app
        .router
        .dashboard()
        .jobs
        .iter()
        .take(inner.height.saturating_sub(1) as usize)
    {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<7}", job.t)),
            Span::raw(format!("{:<22}", translate_data(&job.job, locale))),
            Span::styled(format!("{:<9}", job.robot), value_style()),
            Span::raw(format!("{:<9}", job.d)),
            Span::styled(translate_data(&job.r, locale).to_string(), label_style()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_batteries(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let block = section_block(
        text(locale, "section.batteryInventory"),
        text(locale, "section.batteryByRobot"),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<9}", text(locale, "label.robot")), header_style()),
        Span::styled(format!("{:<7}", "SOC"), header_style()),
        Span::styled(format!("{:<8}", text(locale, "label.temp")), header_style()),
        Span::styled(format!("{:<8}", text(locale, "label.cycle")), header_style()),
        Span::styled(text(locale, "label.state"), header_style()),
    ])];
    for battery in app
        .router
        .dashboard()
        .batteries
        .iter()
        .take(inner.height.saturating_sub(1) as usize)
    {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", battery.id), value_style()),
            Span::raw(format!("{:<7}", battery.soc)),
            Span::raw(format!("{:<8}", battery.temp)),
            Span::raw(format!("{:<8}", battery.cycle)),
            Span::styled(
                translate_data(&battery.state, locale).to_string(),
                label_style(),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_map(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let map = &app.router.dashboard().map;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    metric_card(cards[0], frame, "X", &format!("{:.2}", map.x), "m", "", None);
    metric_card(cards[1], frame, "Y", &format!("{:.2}", map.y), "m", "", None);
    metric_card(
        cards[2],
        frame,
        text(locale, "label.angle"),
        &format!("{:.0}", map.heading),
        "°",
        "",
        None,
    );
    metric_card(
        cards[3],
        frame,
        text(locale, "label.speed"),
        &format!("{:.1}", map.speed),
        "m/s",
        "",
        None,
    );

    let block = section_block(
        text(locale, "section.mapRobot"),
        text(locale, "section.mapRealtime"),
    );
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);
    let lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", text(locale, "label.mission")), label_style()),
        Span::styled(translate_data(&map.mission, locale).to_string(), value_style()),
        Span::styled(
            format!(" / {}: ", text(locale, "label.mapState")),
            label_style(),
        ),
        Span::styled(translate_data(&map.state, locale).to_string(), value_style()),
    ])];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_wireless(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let block = section_block(
        text(locale, "section.wireless"),
        text(locale, "section.wirelessHint"),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(Rect {
            height: inner.height.min(5),
            ..inner
        });
    metric_card(
        cards[0],
        frame,
        text(locale, "label.coordinates"),
        "X 24.2 / Y 18.4",
        "",
        text(locale, "label.currentPoint"),
        None,
    );
    metric_card(
        cards[1],
        frame,
        text(locale, "label.baseStation"),
        "BSSID-02",
        "",
        text(locale, "label.channel"),
        None,
    );
    metric_card(
        cards[2],
        frame,
        text(locale, "label.signal"),
        "-62",
        "dBm",
        text(locale, "label.qualityGood"),
        None,
    );
    metric_card(
        cards[3],
        frame,
        text(locale, "label.ping"),
        "48",
        "ms",
        text(locale, "label.rtt"),
        None,
    );
}

fn render_api(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let constraints = if app.role == Role::Admin {
        vec![
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(6),
        ]
    } else {
        vec![Constraint::Length(5), Constraint::Min(4)]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let api_block = section_block(text(locale, "section.api"), text(locale, "section.apiHint"));
    let api_inner = api_block.inner(rows[0]);
    frame.render_widget(api_block, rows[0]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("GET /api/v1/robots"),
            Line::from("GET /api/v1/jobs"),
            Line::from("GET /api/v1/wireless/diagnostics"),
        ]),
        api_inner,
    );

    let download_block = section_block(
        text(locale, "section.download"),
        text(locale, "section.downloadHint"),
    );
    let download_inner = download_block.inner(rows[1]);
    frame.render_widget(download_block, rows[1]);
    let can_download = app.permissions.effective(app.role).can_download;
    let mut download_line = vec![Span::styled(
        "PNG · CSV · JSON",
        if can_download {
            value_style()
        } else {
            label_style().add_modifier(Modifier::DIM)
        },
    )];
    if !can_download {
        download_line.push(Span::styled(
            format!("  ({})", text(locale, "admin.noPermission")),
            label_style(),
        ));
    }
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(download_line),
            Line::from(Span::styled(
                text(locale, "section.downloadNote"),
                label_style(),
            )),
        ]),
        download_inner,
    );

    if app.role == Role::Admin {
        render_admin_editor(rows[2], frame, app);
    }
}

fn render_admin_editor(area: Rect, frame: &mut ratatui::Frame<'_>, app: &ConsoleApp) {
    let locale = app.locale;
    let block = section_block(
        text(locale, "section.admin"),
        text(locale, "section.adminHint"),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let target = app.permissions.effective(app.admin_role);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(
                "{} {}",
                role_label(locale, app.admin_role),
                text(locale, "admin.rolePermissionSuffix")
            ),
            value_style(),
        ),
        Span::styled(
            format!("  ({})", text(locale, "admin.note")),
            label_style(),
        ),
    ])];
    for (row, tab) in TabKey::ALL.iter().enumerate() {
        let checked = if target.allows(*tab) { "[x]" } else { "[ ]" };
        lines.push(editor_line(
            row == app.admin_cursor,
            format!("{checked} {}", tab_key_label(locale, *tab)),
        ));
    }
    let control = if target.can_control { "[x]" } else { "[ ]" };
    lines.push(editor_line(
        app.admin_cursor == TabKey::ALL.len(),
        format!("{control} {}", text(locale, "admin.control")),
    ));
    let download = if target.can_download { "[x]" } else { "[ ]" };
    lines.push(editor_line(
        app.admin_cursor == TabKey::ALL.len() + 1,
        format!("{download} {}", text(locale, "admin.download")),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn editor_line(selected: bool, label: String) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {label}"),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::raw(format!("  {label}")))
    }
}
