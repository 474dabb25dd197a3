//! Dashboard client
//!
//! Fetches the client list into table snapshots and runs the one-shot
//! actions (logs, delete, upload, add) that refresh it afterwards.

use super::core::{DashboardUpdate, LogView, UpdateSender};
use crate::backend::Backend;
use crate::consts::cli_consts::{
    CREATE_SUCCESS_ALERT, DELETE_SUCCESS_ALERT, UPLOAD_FAILURE_ALERT, UPLOAD_SUCCESS_ALERT,
};
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::record::MessageResponse;
use crate::table::ClientTable;
use log::warn;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Cheap to clone; every action task gets its own handle.
#[derive(Clone)]
pub struct Dashboard {
    backend: Arc<dyn Backend>,
    updates: UpdateSender,
    poll_interval: Duration,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn Backend>, updates: UpdateSender, poll_interval: Duration) -> Self {
        Self {
            backend,
            updates,
            poll_interval,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Fetch the client list and publish a new table.
    ///
    /// Failures are logged and swallowed; the previous table stays on screen.
    pub async fn refresh(&self) {
        match self.backend.list_clients().await {
            Ok(records) => {
                let table = ClientTable::render(&records);
                self.updates
                    .send_poller_event(
                        format!("Fetched {} clients ({} online)", table.total, table.online),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
                self.updates.send_table(table).await;
            }
            Err(e) => {
                warn!("client list fetch failed: {}", e);
                self.updates
                    .send_poller_event(
                        format!("Failed to fetch clients: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    /// Fetch one connection's logs and open them in the log modal.
    pub async fn show_logs(&self, client_id: &str) {
        match self.backend.get_client(client_id).await {
            Ok(detail) => {
                let view = LogView {
                    client_id: client_id.to_string(),
                    summary: detail.summary(),
                    lines: detail.log_lines(),
                };
                self.updates.send_update(DashboardUpdate::Logs(view)).await;
            }
            Err(e) => self.report_failure("Failed to load logs", e).await,
        }
    }

    pub async fn delete_one(&self, client_id: &str) {
        let result = self.backend.delete_client(client_id).await;
        self.finish_delete(&format!("Delete {}", client_id), result)
            .await;
    }

    pub async fn delete_all(&self) {
        let result = self.backend.delete_all_clients().await;
        self.finish_delete("Delete all", result).await;
    }

    async fn finish_delete(
        &self,
        what: &str,
        result: Result<MessageResponse, crate::backend::error::BackendError>,
    ) {
        match result {
            Ok(response) if response.is_success() => {
                self.updates
                    .send_action_event(
                        format!("{}: success", what),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.updates.send_alert(DELETE_SUCCESS_ALERT).await;
                self.refresh().await;
            }
            Ok(response) => {
                self.updates
                    .send_action_event(
                        format!("{}: backend replied '{}'", what, response.message),
                        EventType::Error,
                        LogLevel::Debug,
                    )
                    .await;
            }
            Err(e) => self.report_failure(what, e).await,
        }
    }

    /// Read a local accounts file and upload it.
    pub async fn upload_file(&self, path: &Path) {
        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) => {
                self.report_failure(
                    &format!("Failed to read {}", path.display()),
                    crate::backend::error::BackendError::Io(e),
                )
                .await;
                return;
            }
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "accounts.txt".to_string());

        match self.backend.upload_file(&file_name, contents).await {
            Ok(status) if (200..300).contains(&status) => {
                self.updates
                    .send_action_event(
                        format!("Uploaded {}", file_name),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.updates.send_alert(UPLOAD_SUCCESS_ALERT).await;
                self.refresh().await;
            }
            Ok(status) => {
                self.updates
                    .send_action_event(
                        format!("Upload of {} rejected with status {}", file_name, status),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
                self.updates.send_alert(UPLOAD_FAILURE_ALERT).await;
            }
            Err(e) => self.report_failure("Upload failed", e).await,
        }
    }

    pub async fn add_client(&self, user_id: &str, proxy_url: Option<String>) {
        match self.backend.add_client(user_id, proxy_url).await {
            Ok(response) if response.is_created() => {
                let client_id = response.data_text().unwrap_or("?");
                self.updates
                    .send_action_event(
                        format!("Added client {} for {}", client_id, user_id),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.updates.send_alert(CREATE_SUCCESS_ALERT).await;
                self.refresh().await;
            }
            Ok(response) => {
                self.updates
                    .send_action_event(
                        format!("Add {}: backend replied '{}'", user_id, response.message),
                        EventType::Error,
                        LogLevel::Debug,
                    )
                    .await;
            }
            Err(e) => self.report_failure("Add client failed", e).await,
        }
    }

    async fn report_failure(&self, what: &str, error: crate::backend::error::BackendError) {
        warn!("{}: {}", what, error);
        self.updates
            .send_action_event(
                format!("{}: {}", what, error),
                EventType::Error,
                LogLevel::Warn,
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::backend::error::BackendError;
    use crate::record::{ClientDetail, ConnectionRecord, LogEntry};
    use std::io::Write;
    use tokio::sync::mpsc;

    fn records() -> Vec<ConnectionRecord> {
        vec![
            ConnectionRecord {
                id: "a".to_string(),
                user_id: "u1".to_string(),
                proxy_url: None,
                status: Some(2),
            },
            ConnectionRecord {
                id: "b".to_string(),
                user_id: "u2".to_string(),
                proxy_url: None,
                status: Some(0),
            },
        ]
    }

    fn dashboard(mock: MockBackend) -> (Dashboard, mpsc::Receiver<DashboardUpdate>) {
        let (sender, receiver) = mpsc::channel(64);
        let dashboard = Dashboard::new(
            Arc::new(mock),
            UpdateSender::new(sender),
            Duration::from_secs(5),
        );
        (dashboard, receiver)
    }

    /// Drops the dashboard so the channel closes, then collects what was sent.
    async fn drain(
        dashboard: Dashboard,
        mut receiver: mpsc::Receiver<DashboardUpdate>,
    ) -> Vec<DashboardUpdate> {
        drop(dashboard);
        let mut updates = Vec::new();
        while let Some(update) = receiver.recv().await {
            updates.push(update);
        }
        updates
    }

    fn alerts(updates: &[DashboardUpdate]) -> Vec<&str> {
        updates
            .iter()
            .filter_map(|u| match u {
                DashboardUpdate::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    fn tables(updates: &[DashboardUpdate]) -> Vec<&ClientTable> {
        updates
            .iter()
            .filter_map(|u| match u {
                DashboardUpdate::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_refresh_publishes_table() {
        let mut mock = MockBackend::new();
        mock.expect_list_clients()
            .times(1)
            .returning(|| Ok(records()));
        let (dashboard, receiver) = dashboard(mock);

        dashboard.refresh().await;
        let updates = drain(dashboard, receiver).await;

        let tables = tables(&updates);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].online, 1);
        assert_eq!(tables[0].total, 2);
    }

    #[tokio::test]
    async fn test_refresh_failure_is_swallowed() {
        let mut mock = MockBackend::new();
        mock.expect_list_clients().times(1).returning(|| {
            Err(BackendError::Http {
                status: 502,
                message: "bad gateway".to_string(),
            })
        });
        let (dashboard, receiver) = dashboard(mock);

        dashboard.refresh().await;
        let updates = drain(dashboard, receiver).await;

        assert!(tables(&updates).is_empty());
        assert!(alerts(&updates).is_empty());
        assert!(updates.iter().any(|u| matches!(
            u,
            DashboardUpdate::Event(e) if e.event_type == EventType::Error
        )));
    }

    #[tokio::test]
    async fn test_delete_success_alerts_and_refetches_once() {
        let mut mock = MockBackend::new();
        mock.expect_delete_client()
            .withf(|id| id == "a")
            .times(1)
            .returning(|_| Ok(MessageResponse::new("success")));
        mock.expect_list_clients()
            .times(1)
            .returning(|| Ok(records()));
        let (dashboard, receiver) = dashboard(mock);

        dashboard.delete_one("a").await;
        let updates = drain(dashboard, receiver).await;

        assert_eq!(alerts(&updates), vec![DELETE_SUCCESS_ALERT]);
        assert_eq!(tables(&updates).len(), 1);
    }

    #[tokio::test]
    async fn test_delete_non_success_is_silent() {
        let mut mock = MockBackend::new();
        mock.expect_delete_client()
            .times(1)
            .returning(|_| Ok(MessageResponse::new("failed")));
        mock.expect_list_clients().never();
        let (dashboard, receiver) = dashboard(mock);

        dashboard.delete_one("a").await;
        let updates = drain(dashboard, receiver).await;

        assert!(alerts(&updates).is_empty());
        assert!(tables(&updates).is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_success() {
        let mut mock = MockBackend::new();
        mock.expect_delete_all_clients()
            .times(1)
            .returning(|| Ok(MessageResponse::new("success")));
        mock.expect_list_clients()
            .times(1)
            .returning(|| Ok(Vec::new()));
        let (dashboard, receiver) = dashboard(mock);

        dashboard.delete_all().await;
        let updates = drain(dashboard, receiver).await;

        assert_eq!(alerts(&updates).len(), 1);
        let tables = tables(&updates);
        assert_eq!(tables.len(), 1);
        assert!(tables[0].is_empty());
    }

    #[tokio::test]
    async fn test_delete_transport_failure_has_no_alert() {
        let mut mock = MockBackend::new();
        mock.expect_delete_all_clients().times(1).returning(|| {
            Err(BackendError::Io(std::io::Error::other("connection reset")))
        });
        mock.expect_list_clients().never();
        let (dashboard, receiver) = dashboard(mock);

        dashboard.delete_all().await;
        let updates = drain(dashboard, receiver).await;
        assert!(alerts(&updates).is_empty());
    }

    #[tokio::test]
    async fn test_show_logs_formats_lines() {
        let mut mock = MockBackend::new();
        mock.expect_get_client()
            .withf(|id| id == "a")
            .times(1)
            .returning(|_| {
                Ok(ClientDetail {
                    status: Some(2),
                    proxy_url: None,
                    logs: vec![
                        LogEntry {
                            label: "10:00".to_string(),
                            message: "ping".to_string(),
                        },
                        LogEntry {
                            label: "09:59".to_string(),
                            message: "connected".to_string(),
                        },
                    ],
                })
            });
        let (dashboard, receiver) = dashboard(mock);

        dashboard.show_logs("a").await;
        let updates = drain(dashboard, receiver).await;

        assert_eq!(
            updates,
            vec![DashboardUpdate::Logs(LogView {
                client_id: "a".to_string(),
                summary: "已连接".to_string(),
                lines: vec![
                    "[10:00] -- ping".to_string(),
                    "[09:59] -- connected".to_string()
                ],
            })]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_alerts_without_refetch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "u1==socks5://p:1").unwrap();

        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .times(1)
            .returning(|_, _| Ok(500));
        mock.expect_list_clients().never();
        let (dashboard, receiver) = dashboard(mock);

        dashboard.upload_file(file.path()).await;
        let updates = drain(dashboard, receiver).await;

        assert_eq!(alerts(&updates), vec![UPLOAD_FAILURE_ALERT]);
        assert!(tables(&updates).is_empty());
    }

    #[tokio::test]
    async fn test_upload_success_sends_contents_and_refetches() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "u1\nu2==http://p:2\n").unwrap();

        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .withf(|_, contents| contents.as_slice() == b"u1\nu2==http://p:2\n")
            .times(1)
            .returning(|_, _| Ok(200));
        mock.expect_list_clients()
            .times(1)
            .returning(|| Ok(records()));
        let (dashboard, receiver) = dashboard(mock);

        dashboard.upload_file(file.path()).await;
        let updates = drain(dashboard, receiver).await;

        assert_eq!(alerts(&updates), vec![UPLOAD_SUCCESS_ALERT]);
        assert_eq!(tables(&updates).len(), 1);
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_logged_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut mock = MockBackend::new();
        mock.expect_upload_file().never();
        let (dashboard, receiver) = dashboard(mock);

        dashboard.upload_file(&dir.path().join("missing.txt")).await;
        let updates = drain(dashboard, receiver).await;

        assert!(alerts(&updates).is_empty());
        assert_eq!(updates.len(), 1);
    }

    #[tokio::test]
    async fn test_add_client_created() {
        let mut mock = MockBackend::new();
        mock.expect_add_client()
            .withf(|user_id, proxy| user_id == "u3" && proxy.as_deref() == Some("http://p:3"))
            .times(1)
            .returning(|_, _| Ok(MessageResponse::new("create success")));
        mock.expect_list_clients()
            .times(1)
            .returning(|| Ok(records()));
        let (dashboard, receiver) = dashboard(mock);

        dashboard
            .add_client("u3", Some("http://p:3".to_string()))
            .await;
        let updates = drain(dashboard, receiver).await;

        assert_eq!(alerts(&updates), vec![CREATE_SUCCESS_ALERT]);
        assert_eq!(tables(&updates).len(), 1);
    }
}
