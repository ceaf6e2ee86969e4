pub mod about;
pub mod enrollments;
pub mod events;
pub mod export;
pub mod form;
pub mod home;

use ratatui::{layout::Rect, Frame};

use crate::interactive::app::{InteractiveApp, Page};

pub fn draw_page(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    match app.page {
        Page::Home => home::draw(frame, area, app),
        Page::Events => events::draw(frame, area, app),
        Page::Enrollments => enrollments::draw(frame, area, app),
        Page::Export => export::draw(frame, area, app),
        Page::About => about::draw(frame, area, app),
    }
}
