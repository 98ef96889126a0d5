//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, expense list, sidebar,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, filter and sort state
    pub header: Rect,
    /// Expense table
    pub main: Rect,
    /// Budget gauge and category breakdown
    pub sidebar: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),    // Expense table
                Constraint::Length(36), // Sidebar (fixed width)
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            main: horizontal[0],
            sidebar: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Budget gauge
    pub gauge: Rect,
    /// Category breakdown
    pub breakdown: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Gauge
                Constraint::Min(4),    // Breakdown
            ])
            .split(area);

        Self {
            gauge: chunks[0],
            breakdown: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_cover_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.sidebar.width, 36);
        assert_eq!(layout.main.width + layout.sidebar.width, 120);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect_fixed(50, 7, area);

        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 0);
    }
}
