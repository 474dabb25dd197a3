//! Core worker utilities
//!
//! The update channel between the dashboard and whatever renders it.

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::table::ClientTable;
use std::time::Duration;
use tokio::sync::mpsc;

/// Log lines of one connection, ready for the log modal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LogView {
    pub client_id: String,
    /// Status label and proxy of the client.
    pub summary: String,
    pub lines: Vec<String>,
}

/// Everything the dashboard pushes to its render target.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    /// A fresh table replacing the previous one.
    Table(ClientTable),
    /// Open the log modal with these lines.
    Logs(LogView),
    /// A message the user must acknowledge.
    Alert(String),
    /// An activity log entry.
    Event(Event),
}

/// Sending side of the update channel
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<DashboardUpdate>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<DashboardUpdate>) -> Self {
        Self { sender }
    }

    pub async fn send_update(&self, update: DashboardUpdate) {
        let _ = self.sender.send(update).await;
    }

    pub async fn send_table(&self, table: ClientTable) {
        self.send_update(DashboardUpdate::Table(table)).await;
    }

    pub async fn send_alert(&self, message: &str) {
        self.send_update(DashboardUpdate::Alert(message.to_string()))
            .await;
    }

    pub async fn send_poller_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_update(DashboardUpdate::Event(Event::poller(
            message, event_type, log_level,
        )))
        .await;
    }

    pub async fn send_action_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_update(DashboardUpdate::Event(Event::action(
            message, event_type, log_level,
        )))
        .await;
    }
}

/// Startup configuration of a dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub server_url: String,
    pub poll_interval: Duration,
}

impl DashboardConfig {
    pub fn new(server_url: String, poll_interval: Duration) -> Self {
        Self {
            server_url,
            poll_interval,
        }
    }
}
