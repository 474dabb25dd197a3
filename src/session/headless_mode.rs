//! Headless mode execution

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_shutdown, print_session_starting, print_update,
    },
};
use std::error::Error;

/// Runs the dashboard in headless mode
///
/// Every table, alert and activity entry is printed to stdout until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.server_url);

    // Trigger shutdown on Ctrl+C
    let signal_shutdown = session.shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_shutdown.cancel();
        }
    });

    // Event loop: print updates until shutdown
    loop {
        tokio::select! {
            Some(update) = session.update_receiver.recv() => {
                print_update(&update);
            }
            _ = session.shutdown.cancelled() => {
                break;
            }
        }
    }

    print_session_shutdown();
    let _ = session.poller.await;
    print_session_exit_success();

    Ok(())
}
