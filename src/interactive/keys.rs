use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::interactive::app::{Focus, Page, Popup};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Navigation
    GoTo(Page),
    NextPage,
    PrevPage,

    // Focus
    FocusForm,
    LeaveForm,

    // Sidebar actions
    ClearEnrollments,
    RestoreEvents,

    // Export page
    ExportCsv,
    ExportXlsx,

    // Form editing
    NextField,
    PrevField,
    Submit,
    TypeChar(char),
    Backspace,
    Delete,
    Left,
    Right,
    CursorHome,
    CursorEnd,

    // General
    Help,
    Cancel,
    Quit,
    DismissNotification,

    None,
}

pub fn map_key(key: KeyEvent, focus: &Focus, popup: &Option<Popup>) -> Action {
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }

    // Sidebar actions stay reachable while typing in a form
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Action::ClearEnrollments,
            KeyCode::Char('r') => Action::RestoreEvents,
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match focus {
        Focus::Menu => map_menu_key(key),
        Focus::Form => map_form_key(key),
    }
}

fn map_menu_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('1') => Action::GoTo(Page::Home),
        KeyCode::Char('2') => Action::GoTo(Page::Events),
        KeyCode::Char('3') => Action::GoTo(Page::Enrollments),
        KeyCode::Char('4') => Action::GoTo(Page::Export),
        KeyCode::Char('5') => Action::GoTo(Page::About),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::NextPage,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::PrevPage,
        KeyCode::Enter | KeyCode::Char('n') => Action::FocusForm,
        KeyCode::Char('c') => Action::ClearEnrollments,
        KeyCode::Char('r') => Action::RestoreEvents,
        KeyCode::Char('e') => Action::ExportCsv,
        KeyCode::Char('x') => Action::ExportXlsx,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::DismissNotification,
        _ => Action::None,
    }
}

fn map_form_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::LeaveForm,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_digits_select_pages() {
        assert_eq!(map_key(press(KeyCode::Char('1')), &Focus::Menu, &None), Action::GoTo(Page::Home));
        assert_eq!(map_key(press(KeyCode::Char('4')), &Focus::Menu, &None), Action::GoTo(Page::Export));
        assert_eq!(map_key(press(KeyCode::Char('5')), &Focus::Menu, &None), Action::GoTo(Page::About));
    }

    #[test]
    fn test_letters_are_typed_inside_a_form() {
        assert_eq!(map_key(press(KeyCode::Char('c')), &Focus::Menu, &None), Action::ClearEnrollments);
        assert_eq!(map_key(press(KeyCode::Char('c')), &Focus::Form, &None), Action::TypeChar('c'));
        assert_eq!(map_key(press(KeyCode::Char('q')), &Focus::Form, &None), Action::TypeChar('q'));
    }

    #[test]
    fn test_control_shortcuts_work_from_any_focus() {
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_r, &Focus::Form, &None), Action::RestoreEvents);

        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_l, &Focus::Menu, &None), Action::ClearEnrollments);
    }

    #[test]
    fn test_help_popup_swallows_other_keys() {
        let popup = Some(Popup::Help);
        assert_eq!(map_key(press(KeyCode::Char('c')), &Focus::Menu, &popup), Action::None);
        assert_eq!(map_key(press(KeyCode::Esc), &Focus::Menu, &popup), Action::Cancel);
    }
}
