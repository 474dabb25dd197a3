//! Connection Records
//!
//! Wire types for the backend's `/client/` resources and the display helpers
//! built on them.

use crate::consts::cli_consts::SUCCESS_MESSAGE;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::Display;

/// Lifecycle state of a tracked client connection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConnectionStatus {
    Unconnected,
    Connecting,
    Connected,
    Stopped,
}

impl ConnectionStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unconnected),
            1 => Some(Self::Connecting),
            2 => Some(Self::Connected),
            3 => Some(Self::Stopped),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unconnected => "未连接",
            Self::Connecting => "连接中",
            Self::Connected => "已连接",
            Self::Stopped => "已停止",
        }
    }
}

/// Label for a raw status code. Unknown or missing codes have no label.
pub fn status_label(code: Option<i64>) -> Option<&'static str> {
    code.and_then(ConnectionStatus::from_code)
        .map(|status| status.label())
}

// Anything that is not an integer reads as a missing code instead of failing
// the whole list.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64())
}

/// One tracked client/proxy connection as listed by `GET /client/`.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct ConnectionRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<i64>,
}

/// A single log line of a connection: `(timestamp-or-label, message)`.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(from = "(Value, Value)")]
pub struct LogEntry {
    pub label: String,
    pub message: String,
}

impl From<(Value, Value)> for LogEntry {
    fn from((label, message): (Value, Value)) -> Self {
        Self {
            label: value_text(label),
            message: value_text(message),
        }
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] -- {}", self.label, self.message)
    }
}

/// Detail of one connection as returned by `GET /client/:id`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
pub struct ClientDetail {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl ClientDetail {
    pub fn log_lines(&self) -> Vec<String> {
        self.logs.iter().map(ToString::to_string).collect()
    }

    /// Status label and proxy, e.g. `已连接 via socks5://host:1080`.
    pub fn summary(&self) -> String {
        let status = status_label(self.status).unwrap_or_default();
        match self.proxy_url.as_deref().filter(|proxy| !proxy.is_empty()) {
            Some(proxy) if status.is_empty() => format!("via {}", proxy),
            Some(proxy) => format!("{} via {}", status, proxy),
            None => status.to_string(),
        }
    }
}

/// `{ "data": ... }` wrapper used by the read endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "message": ..., "data": ... }` reply of the mutating endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl MessageResponse {
    #[cfg(test)]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.message == SUCCESS_MESSAGE
    }

    /// The add endpoint answers `"create success"` rather than `"success"`.
    pub fn is_created(&self) -> bool {
        self.is_success() || self.message.starts_with("create")
    }

    /// `data` as text, when the backend sent a string.
    pub fn data_text(&self) -> Option<&str> {
        self.data.as_ref().and_then(Value::as_str)
    }
}
