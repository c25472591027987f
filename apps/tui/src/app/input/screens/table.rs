use crate::app::input::helpers::step_index;
use crate::app::input::screens::PAGE_STEP;
use crate::app::state::App;
use crossterm::event::KeyCode;

#[allow(clippy::missing_const_for_fn)]
pub fn handle_table_input(app: &mut App, key: KeyCode) {
    let total = app.table_len();

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.table_index = step_index(app.table_index, total, -1),
        KeyCode::Down | KeyCode::Char('j') => app.table_index = step_index(app.table_index, total, 1),
        KeyCode::PageUp => app.table_index = step_index(app.table_index, total, -PAGE_STEP),
        KeyCode::PageDown => app.table_index = step_index(app.table_index, total, PAGE_STEP),
        KeyCode::Home => app.table_index = 0,
        KeyCode::End => app.table_index = total.saturating_sub(1),
        _ => {}
    }
}
