use crate::ui::app::App;
use crate::ui::navigation::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown on the detail screen.
const PAGE_LINES: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.current_screen() {
        Screen::ProductList(_) => handle_list_key(app, key),
        Screen::ProductDetails(_) => handle_details_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.open_selected();
        }
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_details(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_details(1),
        KeyCode::PageUp => app.scroll_details(-PAGE_LINES),
        KeyCode::PageDown => app.scroll_details(PAGE_LINES),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_details_to_top(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            app.go_back();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
