//! One-shot commands
//!
//! Run a single dashboard operation, print what it produced and exit.

use super::messages::print_update;
use crate::runtime::build_dashboard;
use crate::workers::DashboardConfig;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OneShot {
    List,
    Logs(String),
    Delete(String),
    DeleteAll,
    Upload(PathBuf),
    Add {
        user_id: String,
        proxy_url: Option<String>,
    },
}

pub async fn run_one_shot(
    config: &DashboardConfig,
    command: OneShot,
) -> Result<(), Box<dyn Error>> {
    let (dashboard, mut update_receiver) = build_dashboard(config)?;

    match command {
        OneShot::List => dashboard.refresh().await,
        OneShot::Logs(id) => dashboard.show_logs(&id).await,
        OneShot::Delete(id) => dashboard.delete_one(&id).await,
        OneShot::DeleteAll => dashboard.delete_all().await,
        OneShot::Upload(path) => dashboard.upload_file(&path).await,
        OneShot::Add { user_id, proxy_url } => dashboard.add_client(&user_id, proxy_url).await,
    }

    // Closing the only sender lets the loop below end.
    drop(dashboard);
    while let Some(update) = update_receiver.recv().await {
        print_update(&update);
    }
    Ok(())
}
