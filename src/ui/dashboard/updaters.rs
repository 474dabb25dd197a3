//! Dashboard state update logic
//!
//! Applies queued dashboard updates to the state

use super::state::{DashboardState, Overlay};
use crate::table::ClientTable;
use crate::workers::DashboardUpdate;
use chrono::Local;

impl DashboardState {
    /// Advance the tick and apply every queued update in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::Table(table) => self.replace_table(table),
            DashboardUpdate::Logs(view) => {
                self.overlay = Overlay::Logs { view, scroll: 0 };
            }
            DashboardUpdate::Alert(message) => self.alerts.push_back(message),
            DashboardUpdate::Event(event) => self.add_to_activity_log(event),
        }
    }

    /// The table is replaced wholesale; only the selection carries over.
    fn replace_table(&mut self, table: ClientTable) {
        self.table = table;
        self.selected = self.selected.min(self.table.rows.len().saturating_sub(1));
        self.last_refresh = Some(Local::now().format("%H:%M:%S").to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ConnectionRecord;
    use crate::workers::LogView;
    use std::time::Instant;

    fn table(n: usize) -> ClientTable {
        let records: Vec<ConnectionRecord> = (0..n)
            .map(|i| ConnectionRecord {
                id: format!("id{}", i),
                user_id: format!("u{}", i),
                proxy_url: None,
                status: Some(2),
            })
            .collect();
        ClientTable::render(&records)
    }

    fn state() -> DashboardState {
        DashboardState::new("http://localhost".to_string(), Instant::now(), false)
    }

    #[test]
    fn test_latest_table_wins() {
        let mut state = state();
        state.add_update(DashboardUpdate::Table(table(3)));
        state.add_update(DashboardUpdate::Table(table(1)));
        state.update();

        assert_eq!(state.table, table(1));
        assert!(state.last_refresh.is_some());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = state();
        state.add_update(DashboardUpdate::Table(table(5)));
        state.update();
        state.selected = 4;

        state.add_update(DashboardUpdate::Table(table(2)));
        state.update();
        assert_eq!(state.selected, 1);

        state.add_update(DashboardUpdate::Table(table(0)));
        state.update();
        assert_eq!(state.selected, 0);
        assert!(state.selected_row().is_none());
    }

    #[test]
    fn test_logs_open_modal_and_alerts_queue() {
        let mut state = state();
        let view = LogView {
            client_id: "a".to_string(),
            summary: String::new(),
            lines: vec!["[t] -- m".to_string()],
        };
        state.add_update(DashboardUpdate::Logs(view.clone()));
        state.add_update(DashboardUpdate::Alert("one".to_string()));
        state.add_update(DashboardUpdate::Alert("two".to_string()));
        state.update();

        assert_eq!(state.overlay, Overlay::Logs { view, scroll: 0 });
        assert_eq!(state.current_alert(), Some("one"));
        assert_eq!(state.alerts.len(), 2);
    }
}
