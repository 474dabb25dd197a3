//! Event System
//!
//! Activity entries produced by the poller and by user actions

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The periodic client list fetch.
    Poller,
    /// A user-triggered request (logs, delete, upload, add).
    Action,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn poller(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Poller, msg, event_type, log_level)
    }

    pub fn action(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Action, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}
