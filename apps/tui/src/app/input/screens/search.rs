use crate::app::input::helpers::step_index;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.end_search(false),
        KeyCode::Enter => app.end_search(true),
        KeyCode::Backspace => app.pop_search(),
        KeyCode::Char(ch) => app.push_search(ch),
        KeyCode::Up => {
            app.sidebar_index = step_index(app.sidebar_index, app.visible_options().len(), -1);
        }
        KeyCode::Down => {
            app.sidebar_index = step_index(app.sidebar_index, app.visible_options().len(), 1);
        }
        _ => {}
    }
}
