//! Unified messaging system for session operations

use crate::table::ClientTable;
use crate::workers::DashboardUpdate;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_ALERT: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
    /// Alerts raised by dashboard actions
    Alert(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn alert(msg: impl Into<String>) -> Self {
        Self::Alert(msg.into())
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        match self {
            Self::Info(msg) => {
                println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
            }
            Self::Success(msg) => {
                println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg);
            }
            Self::Alert(msg) => {
                println!("{}[ALERT]{} {}", COLOR_ALERT, COLOR_RESET, msg);
            }
        }
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, server_url: &str) {
    SessionMessage::info(format!("Starting {} mode against {}", mode, server_url)).print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Dashboard exited successfully").print();
}

/// Plain-text rendering of a client table with its counters.
pub fn table_lines(table: &ClientTable) -> Vec<String> {
    let mut lines = vec![format!("online: {}  all: {}", table.online, table.total)];
    for row in &table.rows {
        lines.push(format!(
            "{:>3}  {:<24}  {:<32}  {:<6}  {}",
            row.seq,
            row.user_id,
            row.proxy_url,
            row.status_text(),
            row.id
        ));
    }
    lines
}

/// Print one dashboard update to stdout.
pub fn print_update(update: &DashboardUpdate) {
    match update {
        DashboardUpdate::Table(table) => {
            for line in table_lines(table) {
                println!("{}", line);
            }
        }
        DashboardUpdate::Logs(view) => {
            SessionMessage::info(format!("Logs of {} {}", view.client_id, view.summary))
                .print();
            for line in &view.lines {
                println!("{}", line);
            }
        }
        DashboardUpdate::Alert(message) => SessionMessage::alert(message.as_str()).print(),
        DashboardUpdate::Event(event) => {
            if event.should_display() {
                println!("{}", event);
            }
        }
    }
}
