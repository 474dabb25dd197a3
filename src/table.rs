//! Client Table
//!
//! The rendered form of one client list fetch.

use crate::consts::cli_consts::CONNECTED_STATUS;
use crate::record::{ConnectionRecord, status_label};

/// One rendered table row. Row actions act on `id`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClientRow {
    /// 1-based position in fetch order.
    pub seq: usize,
    pub id: String,
    pub user_id: String,
    /// Empty when the record has no proxy.
    pub proxy_url: String,
    pub status: Option<i64>,
    pub status_label: Option<&'static str>,
}

impl ClientRow {
    /// Label text for display; unknown status codes show nothing.
    pub fn status_text(&self) -> &'static str {
        self.status_label.unwrap_or_default()
    }
}

/// Snapshot of the whole client list with its counters.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ClientTable {
    pub rows: Vec<ClientRow>,
    /// Records with status "connected".
    pub online: usize,
    /// All records.
    pub total: usize,
}

impl ClientTable {
    /// Builds rows and counters in a single pass, in list order.
    pub fn render(records: &[ConnectionRecord]) -> Self {
        let mut table = ClientTable::default();
        for record in records {
            table.total += 1;
            if record.status == Some(CONNECTED_STATUS) {
                table.online += 1;
            }
            table.rows.push(ClientRow {
                seq: table.total,
                id: record.id.clone(),
                user_id: record.user_id.clone(),
                proxy_url: record.proxy_url.clone().unwrap_or_default(),
                status: record.status,
                status_label: status_label(record.status),
            });
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
