//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for an activity entry based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Poller => Color::Cyan,
        Source::Action => Color::Yellow,
    }
}

/// Color of a status cell.
pub fn get_status_color(status: Option<i64>) -> Color {
    match status {
        Some(0) => Color::DarkGray,
        Some(1) => Color::LightYellow,
        Some(2) => Color::LightGreen,
        Some(3) => Color::LightRed,
        _ => Color::White,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

/// Rectangle of the given percentage size centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
