//! Main application UI.

use chrono::{DateTime, Local, NaiveDate};
use eframe::egui::{self, RichText};
use egui_phosphor::regular::{CHART_BAR, CLOCK, HOUSE, TARGET, USER};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::client::SummaryClient;
use crate::config::AppConfig;
use crate::db;
use crate::entities::{agents, attendance_logs, attendance_targets};
use crate::models::summary::WorkSummary;
use crate::report::{self, LateLoginEntry};

use super::components::colors;
use super::{agent_view_panel, dashboard, late_logins_panel, summary_panel, targets_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    LateLogins,
    AgentView,
    WorkSummary,
    Targets,
}

impl Panel {
    /// All panels in sidebar order.
    pub const ALL: [Panel; 5] = [
        Panel::Dashboard,
        Panel::LateLogins,
        Panel::AgentView,
        Panel::WorkSummary,
        Panel::Targets,
    ];

    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::LateLogins => "Late Logins",
            Panel::AgentView => "Agent View",
            Panel::WorkSummary => "Work Summary",
            Panel::Targets => "Attendance Targets",
        }
    }

    /// Sidebar icon for the panel.
    pub fn icon(&self) -> &'static str {
        match self {
            Panel::Dashboard => HOUSE,
            Panel::LateLogins => CLOCK,
            Panel::AgentView => USER,
            Panel::WorkSummary => CHART_BAR,
            Panel::Targets => TARGET,
        }
    }
}

/// Messages from async tasks to UI.
///
/// Fetches that can be superseded by a newer request (date changes, agent
/// changes, refreshes) carry the sequence number they were issued with;
/// results from stale requests are discarded so a slow early response can
/// never overwrite a newer one.
pub enum UiMessage {
    AgentsLoaded(Result<Vec<agents::Model>, String>),
    TargetsLoaded(Result<Vec<attendance_targets::Model>, String>),
    LateLoginsLoaded {
        seq: u64,
        result: Result<Vec<LateLoginEntry>, String>,
    },
    AgentLogsLoaded {
        seq: u64,
        result: Result<Vec<attendance_logs::Model>, String>,
    },
    SummaryLoaded {
        seq: u64,
        as_of: DateTime<Local>,
        result: Result<Vec<WorkSummary>, String>,
    },
}

/// Main application state.
pub struct App {
    // Runtime and database
    pub rt: tokio::runtime::Runtime,
    pub pool: DatabaseConnection,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub current_panel: Panel,

    // Agent roster (dashboard + agent view)
    pub agents: Vec<agents::Model>,
    pub agents_loading: bool,

    // Late logins
    pub selected_date: NaiveDate,
    pub late_entries: Vec<LateLoginEntry>,
    pub late_loading: bool,
    late_seq: u64,

    // Agent view
    pub selected_agent: Option<agents::Model>,
    pub agent_logs: Vec<attendance_logs::Model>,
    pub agent_logs_loading: bool,
    agent_logs_seq: u64,

    // Work summary
    pub summary_records: Vec<WorkSummary>,
    pub summary_loading: bool,
    pub summary_as_of: Option<DateTime<Local>>,
    summary_seq: u64,

    // Attendance targets
    pub targets: Vec<attendance_targets::Model>,
    pub targets_loading: bool,
    pub selected_month: Option<String>,

    // Dialogs
    pub error_message: Option<String>,

    // Configuration
    pub config: AppConfig,
}

impl App {
    pub fn new(pool: DatabaseConnection, config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut app = Self {
            rt,
            pool,
            tx,
            rx,
            current_panel: Panel::default(),
            agents: Vec::new(),
            agents_loading: false,
            selected_date: Local::now().date_naive(),
            late_entries: Vec::new(),
            late_loading: false,
            late_seq: 0,
            selected_agent: None,
            agent_logs: Vec::new(),
            agent_logs_loading: false,
            agent_logs_seq: 0,
            summary_records: Vec::new(),
            summary_loading: false,
            summary_as_of: None,
            summary_seq: 0,
            targets: Vec::new(),
            targets_loading: false,
            selected_month: None,
            error_message: None,
            config,
        };

        // Load initial data
        app.load_agents();
        app.load_targets();
        app.load_late_logins();

        app
    }

    /// Load the agent roster.
    pub fn load_agents(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        self.agents_loading = true;

        self.rt.spawn(async move {
            let result = db::agent::list_all(&pool).await.map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::AgentsLoaded(result));
        });
    }

    /// Load the monthly attendance targets.
    pub fn load_targets(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        self.targets_loading = true;

        self.rt.spawn(async move {
            let result = db::target::list_all(&pool).await.map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::TargetsLoaded(result));
        });
    }

    /// Compute the late logins for the selected date.
    ///
    /// Fetches the roster and the day's logs, then runs the aggregation
    /// off the UI thread. Supersedes any in-flight request.
    pub fn load_late_logins(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        let day = self.selected_date;
        let cutoff = self.config.report.late_cutoff();

        self.late_seq += 1;
        let seq = self.late_seq;
        self.late_loading = true;

        self.rt.spawn(async move {
            let result = async {
                let agents = db::agent::list_all(&pool).await?;
                let events = db::attendance::list_for_day(&pool, day).await?;
                Ok::<_, sea_orm::DbErr>(report::late_logins(&events, &agents, day, cutoff))
            }
            .await
            .map_err(|e| e.to_string());

            let _ = tx.send(UiMessage::LateLoginsLoaded { seq, result });
        });
    }

    /// Load the most recent logs for the selected agent.
    pub fn load_agent_logs(&mut self) {
        let Some(agent) = &self.selected_agent else {
            return;
        };

        let pool = self.pool.clone();
        let tx = self.tx.clone();
        let ldap = agent.ldap.clone();
        let limit = self.config.report.agent_log_limit;

        self.agent_logs_seq += 1;
        let seq = self.agent_logs_seq;
        self.agent_logs_loading = true;

        self.rt.spawn(async move {
            let result = db::attendance::list_recent_for_agent(&pool, &ldap, limit)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::AgentLogsLoaded { seq, result });
        });
    }

    /// Fetch the remote work summary as of now.
    pub fn load_summary(&mut self) {
        let tx = self.tx.clone();
        let url = self.config.api.summary_url.clone();
        let timeout = self.config.api.timeout_secs;
        let as_of = Local::now();

        self.summary_seq += 1;
        let seq = self.summary_seq;
        self.summary_loading = true;

        self.rt.spawn(async move {
            let result = async {
                let client = SummaryClient::new(&url, timeout)?;
                client.fetch_summary(Some(as_of)).await
            }
            .await
            .map_err(|e| e.to_string());

            let _ = tx.send(UiMessage::SummaryLoaded { seq, as_of, result });
        });
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::AgentsLoaded(result) => {
                    self.agents_loading = false;
                    match result {
                        Ok(agents) => self.agents = agents,
                        Err(e) => {
                            self.error_message = Some(e.clone());
                            tracing::error!("Failed to load agents: {e}");
                        }
                    }
                }
                UiMessage::TargetsLoaded(result) => {
                    self.targets_loading = false;
                    match result {
                        Ok(mut targets) => {
                            report::targets::sort_newest_first(&mut targets);
                            if self.selected_month.is_none() {
                                self.selected_month = targets.first().map(|t| t.month_year.clone());
                            }
                            self.targets = targets;
                        }
                        Err(e) => {
                            self.error_message = Some(e.clone());
                            tracing::error!("Failed to load targets: {e}");
                        }
                    }
                }
                UiMessage::LateLoginsLoaded { seq, result } => {
                    if seq != self.late_seq {
                        continue; // superseded by a newer request
                    }
                    self.late_loading = false;
                    match result {
                        Ok(entries) => self.late_entries = entries,
                        Err(e) => {
                            self.late_entries.clear();
                            self.error_message = Some(e.clone());
                            tracing::error!("Failed to load late logins: {e}");
                        }
                    }
                }
                UiMessage::AgentLogsLoaded { seq, result } => {
                    if seq != self.agent_logs_seq {
                        continue;
                    }
                    self.agent_logs_loading = false;
                    match result {
                        Ok(logs) => self.agent_logs = logs,
                        Err(e) => {
                            self.agent_logs.clear();
                            self.error_message = Some(e.clone());
                            tracing::error!("Failed to load agent logs: {e}");
                        }
                    }
                }
                UiMessage::SummaryLoaded { seq, as_of, result } => {
                    if seq != self.summary_seq {
                        continue;
                    }
                    self.summary_loading = false;
                    match result {
                        Ok(records) => {
                            self.summary_records = records;
                            self.summary_as_of = Some(as_of);
                        }
                        Err(e) => {
                            self.summary_records.clear();
                            self.error_message = Some(e.clone());
                            tracing::error!("Failed to load work summary: {e}");
                        }
                    }
                }
            }
        }
    }

    /// Whether any fetch is still in flight.
    fn is_loading(&self) -> bool {
        self.agents_loading
            || self.late_loading
            || self.agent_logs_loading
            || self.summary_loading
            || self.targets_loading
    }

    /// Render the navigation sidebar.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(15.0);
                ui.label(RichText::new("Agent Dashboard").size(18.0).strong());
                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                for panel in Panel::ALL {
                    let selected = self.current_panel == panel;
                    let label = format!("{}  {}", panel.icon(), panel.name());
                    if ui.selectable_label(selected, RichText::new(label).size(14.0)).clicked() {
                        self.current_panel = panel;
                    }
                    ui.add_space(4.0);
                }
            });
    }

    /// Render the error dialog.
    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint while fetches are in flight
        if self.is_loading() {
            ctx.request_repaint();
        }

        self.show_sidebar(ctx);
        self.show_error_dialog(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Dashboard => dashboard::show(self, ui),
            Panel::LateLogins => late_logins_panel::show(self, ui),
            Panel::AgentView => agent_view_panel::show(self, ui),
            Panel::WorkSummary => summary_panel::show(self, ui),
            Panel::Targets => targets_panel::show(self, ui),
        });
    }
}
