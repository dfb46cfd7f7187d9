use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Outer frame shared by every screen
pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Header: 4 rows (bordered, two lines of text)
    /// - Body: everything else
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(3),    // Body (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { header_area: chunks[0], body_area: chunks[1], status_area: chunks[2] }
    }
}

/// Landing body: search input above the category grid
pub struct LandingLayout {
    pub input_area: Rect,
    pub grid_area: Rect,
}

impl LandingLayout {
    pub fn new(body: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body);

        Self { input_area: chunks[0], grid_area: chunks[1] }
    }
}

/// Results body: case file list (60%) beside a preview pane (40%)
pub struct ResultsLayout {
    pub list_area: Rect,
    pub preview_area: Rect,
}

impl ResultsLayout {
    pub fn new(body: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(body);

        Self { list_area: chunks[0], preview_area: chunks[1] }
    }
}

/// A rectangle of the given percentages centered in `area`, for overlays
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
