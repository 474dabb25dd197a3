//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::ui::dashboard::{Action, DashboardState, render_dashboard};
use crate::workers::{Dashboard, DashboardUpdate};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Application state
pub struct App {
    /// What the screen shows.
    state: DashboardState,

    /// Handle used to start actions; each action runs on its own clone.
    dashboard: Dashboard,

    /// Receives tables, logs, alerts and activity from the dashboard.
    update_receiver: mpsc::Receiver<DashboardUpdate>,

    /// Cancelled on quit; stops the polling loop.
    shutdown: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        server_url: String,
        dashboard: Dashboard,
        update_receiver: mpsc::Receiver<DashboardUpdate>,
        shutdown: CancellationToken,
        with_background_color: bool,
    ) -> Self {
        Self {
            state: DashboardState::new(server_url, Instant::now(), with_background_color),
            dashboard,
            update_receiver,
            shutdown,
        }
    }

    /// Start an action in the background. Results arrive as updates.
    fn dispatch(&self, action: Action) {
        let dashboard = self.dashboard.clone();
        tokio::spawn(async move {
            match action {
                Action::ShowLogs(id) => dashboard.show_logs(&id).await,
                Action::Delete(id) => dashboard.delete_one(&id).await,
                Action::DeleteAll => dashboard.delete_all().await,
                Action::Upload(path) => dashboard.upload_file(&path).await,
                Action::Add { user_id, proxy_url } => {
                    dashboard.add_client(&user_id, proxy_url).await
                }
                Action::Refresh => dashboard.refresh().await,
                Action::Quit => {}
            }
        });
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Stopped from outside (Ctrl+C)
        if app.shutdown.is_cancelled() {
            return Ok(());
        }

        // Queue all incoming updates for processing
        while let Ok(update) = app.update_receiver.try_recv() {
            app.state.add_update(update);
        }

        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                match app.state.handle_key_event(key) {
                    Some(Action::Quit) => {
                        app.shutdown.cancel();
                        return Ok(());
                    }
                    Some(action) => app.dispatch(action),
                    None => {}
                }
            }
        }
    }
}
