//! Dashboard state management
//!
//! Contains the main dashboard state struct and the overlays drawn on top of it

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as ActivityEvent;
use crate::table::{ClientRow, ClientTable};
use crate::workers::{DashboardUpdate, LogView};

use std::collections::VecDeque;
use std::time::Instant;

/// What a text prompt collects.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PromptKind {
    /// Path of an accounts file to upload.
    Upload,
    /// `USER_ID [PROXY_URL]` of a client to add.
    Add,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// Modal drawn above the client table.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Logs { view: LogView, scroll: u16 },
    Prompt(Prompt),
}

#[derive(Debug)]
pub struct DashboardState {
    /// Backend the dashboard polls.
    pub server_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Most recently fetched client table.
    pub table: ClientTable,
    /// Index of the selected row.
    pub selected: usize,
    /// Local time of the last table received.
    pub last_refresh: Option<String>,
    /// Updates waiting to be applied
    pub pending_updates: VecDeque<DashboardUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<ActivityEvent>,
    /// Alerts waiting to be acknowledged, oldest first.
    pub alerts: VecDeque<String>,
    pub overlay: Overlay,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(server_url: String, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            server_url,
            start_time,
            with_background_color,
            table: ClientTable::default(),
            selected: 0,
            last_refresh: None,
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            alerts: VecDeque::new(),
            overlay: Overlay::None,
            tick: 0,
        }
    }

    pub fn selected_row(&self) -> Option<&ClientRow> {
        self.table.rows.get(self.selected)
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an update to the processing queue
    pub fn add_update(&mut self, update: DashboardUpdate) {
        self.pending_updates.push_back(update);
    }
}
