use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Sidebar and page split within the main area
pub struct PanelLayout {
    pub sidebar: Rect,
    pub page: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// Fixed-width sidebar on the left, the page gets the rest.
pub fn panel_layout(area: Rect) -> PanelLayout {
    let sidebar_width = if area.width < 80 { 22 } else { 28 };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width),
            Constraint::Min(20),
        ])
        .split(area);

    PanelLayout {
        sidebar: chunks[0],
        page: chunks[1],
    }
}

/// Split a page into a form on top and a listing below.
pub fn form_and_list(area: Rect, form_rows: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_rows + 3),
            Constraint::Min(3),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_strip_collapses_when_empty() {
        let layout = app_layout(Rect::new(0, 0, 100, 40), 0);
        assert_eq!(layout.notifications.height, 0);

        let layout = app_layout(Rect::new(0, 0, 100, 40), 7);
        assert_eq!(layout.notifications.height, 5);
    }

    #[test]
    fn test_centered_popup_fits_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(60, 20, area);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
    }
}
