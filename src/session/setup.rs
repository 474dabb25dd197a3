//! Session setup and initialization

use crate::runtime::start_dashboard;
use crate::workers::{Dashboard, DashboardConfig, DashboardUpdate};
use std::error::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Dashboard handle for user actions
    pub dashboard: Dashboard,
    /// Updates for the render target
    pub update_receiver: mpsc::Receiver<DashboardUpdate>,
    /// The polling task
    pub poller: JoinHandle<()>,
    /// Cancel to stop polling
    pub shutdown: CancellationToken,
    /// Backend being polled (for display purposes)
    pub server_url: String,
}

/// Sets up a polling dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the backend client
/// 2. Sets up the cancellation token
/// 3. Starts the polling loop
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be created
pub fn setup_session(config: &DashboardConfig) -> Result<SessionData, Box<dyn Error>> {
    let shutdown = CancellationToken::new();
    let (dashboard, update_receiver, poller) = start_dashboard(config, shutdown.clone())?;

    Ok(SessionData {
        dashboard,
        update_receiver,
        poller,
        shutdown,
        server_url: config.server_url.clone(),
    })
}
