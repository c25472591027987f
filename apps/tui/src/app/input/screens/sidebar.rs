use crate::app::input::helpers::step_index;
use crate::app::input::screens::PAGE_STEP;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_sidebar_input(app: &mut App, key: KeyCode) {
    let total = app.visible_options().len();

    match key {
        KeyCode::Esc => {
            if !app.search.is_empty() {
                app.end_search(false);
            }
        }
        KeyCode::Char('/') => {
            app.searching = true;
        }
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_highlighted(),
        KeyCode::Char('c') => app.clear_selection(),
        KeyCode::Char('d') => app.restore_defaults(),
        KeyCode::Char('a') => app.select_all_visible(),
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_index = step_index(app.sidebar_index, total, -1),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_index = step_index(app.sidebar_index, total, 1),
        KeyCode::PageUp => app.sidebar_index = step_index(app.sidebar_index, total, -PAGE_STEP),
        KeyCode::PageDown => app.sidebar_index = step_index(app.sidebar_index, total, PAGE_STEP),
        KeyCode::Home => app.sidebar_index = 0,
        KeyCode::End => app.sidebar_index = total.saturating_sub(1),
        _ => {}
    }
}
