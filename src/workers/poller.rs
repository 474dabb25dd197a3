//! Client list polling loop

use super::dashboard::Dashboard;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Refresh immediately, then again one poll interval after each refresh
/// completes, until `shutdown` is cancelled.
pub async fn run_polling(dashboard: Dashboard, shutdown: CancellationToken) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = dashboard.refresh() => {}
        }
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = sleep(dashboard.poll_interval()) => {}
        }
    }
}

pub fn spawn_poller(dashboard: Dashboard, shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(run_polling(dashboard, shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::backend::error::BackendError;
    use crate::workers::core::{DashboardUpdate, UpdateSender};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_polling_survives_failures_and_stops_on_cancel() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut mock = MockBackend::new();
        mock.expect_list_clients().returning(move || {
            // Every other fetch fails.
            if counter.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                Err(BackendError::Http {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            } else {
                Ok(Vec::new())
            }
        });

        let (sender, mut receiver) = mpsc::channel(256);
        let dashboard = Dashboard::new(
            Arc::new(mock),
            UpdateSender::new(sender),
            Duration::from_millis(10),
        );
        let shutdown = CancellationToken::new();
        let handle = spawn_poller(dashboard, shutdown.clone());

        // Wait for a table, which only the second (successful) fetch produces.
        let saw_table = timeout(Duration::from_secs(5), async {
            while let Some(update) = receiver.recv().await {
                if matches!(update, DashboardUpdate::Table(_)) {
                    return true;
                }
            }
            false
        })
        .await
        .unwrap();
        assert!(saw_table);

        shutdown.cancel();
        timeout(Duration::from_secs(5), handle)
            .await
            .expect("poller did not stop")
            .unwrap();
        assert!(calls.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_first_fetch_is_immediate() {
        let mut mock = MockBackend::new();
        mock.expect_list_clients().returning(|| Ok(Vec::new()));

        let (sender, mut receiver) = mpsc::channel(16);
        let dashboard = Dashboard::new(
            Arc::new(mock),
            UpdateSender::new(sender),
            Duration::from_secs(3600),
        );
        let shutdown = CancellationToken::new();
        let handle = spawn_poller(dashboard, shutdown.clone());

        let first_table = timeout(Duration::from_secs(5), async {
            loop {
                match receiver.recv().await {
                    Some(DashboardUpdate::Table(table)) => return Some(table),
                    Some(_) => continue,
                    None => return None,
                }
            }
        })
        .await
        .unwrap();
        assert!(first_table.is_some());

        shutdown.cancel();
        handle.await.unwrap();
    }
}
