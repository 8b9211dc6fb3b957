// event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::nav::Tab;
use crate::tui::app::{App, Mode, Popup};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    SubmitPost(String),
    SubmitChat(String),
    QuizComplete(f64),
}

pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => Action::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.popup {
        Popup::Themes => return handle_theme_popup(app, key),
        Popup::Crisis => return handle_crisis_popup(app, key),
        Popup::None => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Insert => handle_insert_key(app, key),
    }
}

fn handle_theme_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_popup(),
        KeyCode::Char('j') | KeyCode::Down => app.theme_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_scroll_up(),
        _ => {}
    }
    Action::None
}

fn handle_crisis_popup(app: &mut App, key: KeyEvent) -> Action {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
        app.close_popup();
    }
    Action::None
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,

        // tabs
        KeyCode::Tab => {
            app.next_tab();
            Action::None
        }
        KeyCode::BackTab => {
            app.prev_tab();
            Action::None
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.select_tab(tab);
            }
            Action::None
        }

        KeyCode::Char('i') => {
            app.enter_insert();
            Action::None
        }

        KeyCode::Char('t') => {
            app.cycle_theme();
            Action::None
        }
        KeyCode::Char('T') => {
            app.open_theme_popup();
            Action::None
        }

        // quiz answers on the resources tab
        KeyCode::Char('y') => app
            .answer_quiz(true)
            .map_or(Action::None, Action::QuizComplete),
        KeyCode::Char('n') => app
            .answer_quiz(false)
            .map_or(Action::None, Action::QuizComplete),
        KeyCode::Char('r') if app.tab == Tab::Resources => {
            app.restart_quiz();
            Action::None
        }

        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            Action::None
        }

        _ => Action::None,
    }
}

fn handle_insert_key(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => app.move_cursor_start(),
            KeyCode::Char('e') => app.move_cursor_end(),
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return Action::None;
    }

    match key.code {
        KeyCode::Esc => app.exit_insert(),

        KeyCode::Enter => {
            app.exit_insert();
            return match (app.submit(), app.tab) {
                (Some(text), Tab::Discussion) => Action::SubmitPost(text),
                (Some(text), Tab::Chatbot) => Action::SubmitChat(text),
                _ => Action::None,
            };
        }

        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Delete => app.delete_char_forward(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_start(),
        KeyCode::End => app.move_cursor_end(),
        _ => {}
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeKind;

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn number_keys_pick_tabs() {
        let mut app = App::with_theme(None, ThemeKind::Dusk);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Resources);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::Help);
    }

    #[test]
    fn enter_in_chatbot_submits_chat() {
        let mut app = App::with_theme(None, ThemeKind::Dusk);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            Action::SubmitChat("hi".to_string())
        );
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn t_cycles_themes_and_wraps() {
        let mut app = App::with_theme(None, ThemeKind::Dusk);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_kind, ThemeKind::ALL[1]);
        assert_eq!(app.popup, Popup::None);

        for _ in 1..ThemeKind::ALL.len() {
            press(&mut app, KeyCode::Char('t'));
        }
        assert_eq!(app.theme_kind, ThemeKind::Dusk);

        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.popup, Popup::Themes);
    }

    #[test]
    fn quiz_keys_ignored_off_resources() {
        let mut app = App::with_theme(None, ThemeKind::Dusk);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.quiz.position(), 0);
    }
}
