//! Runtime wiring for the dashboard and its polling task

use crate::backend::{Backend, BackendClient, error::BackendError};
use crate::consts::cli_consts::UPDATE_QUEUE_SIZE;
use crate::workers::poller::spawn_poller;
use crate::workers::{Dashboard, DashboardConfig, DashboardUpdate, UpdateSender};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Build a dashboard talking to the configured server, without polling.
pub fn build_dashboard(
    config: &DashboardConfig,
) -> Result<(Dashboard, mpsc::Receiver<DashboardUpdate>), BackendError> {
    let backend: Arc<dyn Backend> = Arc::new(BackendClient::new(&config.server_url)?);
    let (update_sender, update_receiver) = mpsc::channel::<DashboardUpdate>(UPDATE_QUEUE_SIZE);
    let dashboard = Dashboard::new(
        backend,
        UpdateSender::new(update_sender),
        config.poll_interval,
    );
    Ok((dashboard, update_receiver))
}

/// Build a dashboard and start its polling loop.
///
/// Cancelling `shutdown` stops the loop; the returned handle finishes soon after.
pub fn start_dashboard(
    config: &DashboardConfig,
    shutdown: CancellationToken,
) -> Result<(Dashboard, mpsc::Receiver<DashboardUpdate>, JoinHandle<()>), BackendError> {
    let (dashboard, update_receiver) = build_dashboard(config)?;
    let poller = spawn_poller(dashboard.clone(), shutdown);
    Ok((dashboard, update_receiver, poller))
}
