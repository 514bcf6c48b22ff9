use crate::application::{App, AppMode, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.quit();
            return;
        }

        match app.mode {
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::Normal => match key {
                KeyCode::F(1) => app.open_help(),
                KeyCode::F(2) => app.toggle_screen(),
                _ => match app.screen {
                    Screen::Signup => Self::handle_signup(app, key, modifiers),
                    Screen::Passengers => Self::handle_passengers(app, key),
                },
            },
        }
    }

    fn handle_signup(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => app.advance(),
            KeyCode::Esc => app.back(),
            KeyCode::Down | KeyCode::Tab => app.focus_next(),
            KeyCode::Up | KeyCode::BackTab => app.focus_previous(),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                app.type_char(c);
            }
            _ => {}
        }
    }

    fn handle_passengers(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Right | KeyCode::Char('l') => app.next_page(),
            KeyCode::Left | KeyCode::Char('h') => app.previous_page(),
            KeyCode::Char('+') => app.cycle_rows_per_page(true),
            KeyCode::Char('-') => app.cycle_rows_per_page(false),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_rows(true),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_rows(false),
            KeyCode::Char('r') => app.refresh_passengers(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::tests::test_app;
    use crate::domain::{Field, Step};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_q_is_text_on_signup_screen() {
        let (mut app, _) = test_app();
        type_text(&mut app, "q@x.io");
        assert_eq!(app.wizard.form().email, "q@x.io");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (mut app, _) = test_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
        assert_eq!(app.wizard.form().email, "");
    }

    #[test]
    fn test_full_signup_by_keyboard() {
        let (mut app, _) = test_app();
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "12345678");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "12345678");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.step(), Step::Personal);

        type_text(&mut app, "A");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "B");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.step(), Step::Review);

        press(&mut app, KeyCode::Enter);
        assert!(app.wizard.is_submitted());
        assert_eq!(app.status_message.as_deref(), Some("Signup submitted"));
    }

    #[test]
    fn test_escape_goes_back() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.step(), Step::Account);

        app.wizard.set_field(Field::Email, "a@b.com");
        app.wizard.set_field(Field::Password, "12345678");
        app.wizard.set_field(Field::ConfirmPassword, "12345678");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.step(), Step::Account);
    }

    #[test]
    fn test_help_toggle() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::F(1));
        assert!(matches!(app.mode, AppMode::Help));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.help_scroll, 2);
        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.mode, AppMode::Normal));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_passenger_keys() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.screen, Screen::Passengers);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.passengers.rows_per_page(), 25);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
