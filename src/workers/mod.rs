pub mod core;
pub mod dashboard;
pub mod poller;

pub use self::core::{DashboardConfig, DashboardUpdate, LogView, UpdateSender};
pub use dashboard::Dashboard;
