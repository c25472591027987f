use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

mod help;
mod search;
mod sidebar;
mod table;

/// Rows moved by PageUp / PageDown
pub(crate) const PAGE_STEP: isize = 10;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.searching {
        search::handle_search_input(app, key);
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    match app.focus {
        Focus::Sidebar => sidebar::handle_sidebar_input(app, key),
        Focus::Table => table::handle_table_input(app, key),
    }
}

/// Keys that mean the same thing whichever panel has focus
fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('r') => {
            app.refresh_requested = true;
            app.status_message = "Refreshing...".to_string();
        }
        KeyCode::Char('s') => app.cycle_sort_column(),
        KeyCode::Char('S') => app.cycle_sort_column_back(),
        KeyCode::Char('o') => app.toggle_sort_order(),
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{loaded_app, PAYLOAD};
    use crate::view::SortColumn;

    #[tokio::test]
    async fn test_space_toggles_highlighted_country() -> Result<(), std::io::Error> {
        let (mut app, _file) = loaded_app(PAYLOAD).await?;
        assert_eq!(app.highlighted_option(), Some("Brazil"));
        assert!(app.selection.contains("Brazil"));

        dispatch_input(&mut app, KeyCode::Char(' '));
        assert!(!app.selection.contains("Brazil"));

        dispatch_input(&mut app, KeyCode::Down);
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.selection.contains("Chile"));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_and_defaults() -> Result<(), std::io::Error> {
        let (mut app, _file) = loaded_app(PAYLOAD).await?;

        dispatch_input(&mut app, KeyCode::Char('c'));
        assert!(app.selection.is_empty());
        assert_eq!(app.view().filtered.len(), 4);

        dispatch_input(&mut app, KeyCode::Char('d'));
        assert_eq!(app.selection.len(), 3);

        dispatch_input(&mut app, KeyCode::Char('a'));
        assert_eq!(app.selection.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_search_mode_captures_letters() -> Result<(), std::io::Error> {
        let (mut app, _file) = loaded_app(PAYLOAD).await?;

        dispatch_input(&mut app, KeyCode::Char('/'));
        assert!(app.searching);
        for ch in "qind".chars() {
            dispatch_input(&mut app, KeyCode::Char(ch));
        }
        // 'q' is text while searching, not quit
        assert!(app.running);
        assert_eq!(app.search, "qind");

        dispatch_input(&mut app, KeyCode::Backspace);
        dispatch_input(&mut app, KeyCode::Backspace);
        dispatch_input(&mut app, KeyCode::Backspace);
        dispatch_input(&mut app, KeyCode::Backspace);
        for ch in "ind".chars() {
            dispatch_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.highlighted_option(), Some("India"));

        dispatch_input(&mut app, KeyCode::Enter);
        assert!(!app.searching);
        assert_eq!(app.search, "ind");

        dispatch_input(&mut app, KeyCode::Char('/'));
        dispatch_input(&mut app, KeyCode::Esc);
        assert!(app.search.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_global_keys() -> Result<(), std::io::Error> {
        let (mut app, _file) = loaded_app(PAYLOAD).await?;

        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Table);

        dispatch_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.table_sort.column, SortColumn::Deaths);

        dispatch_input(&mut app, KeyCode::Char('r'));
        assert!(app.refresh_requested);

        dispatch_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(app.running, "help swallows keys until closed");
        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);

        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
        Ok(())
    }

    #[tokio::test]
    async fn test_table_navigation_clamps() -> Result<(), std::io::Error> {
        let (mut app, _file) = loaded_app(PAYLOAD).await?;
        app.focus = Focus::Table;

        dispatch_input(&mut app, KeyCode::End);
        assert_eq!(app.table_index, 2);
        dispatch_input(&mut app, KeyCode::Down);
        assert_eq!(app.table_index, 2);
        dispatch_input(&mut app, KeyCode::Home);
        assert_eq!(app.table_index, 0);
        Ok(())
    }
}
