// UI module for the COVID-19 dashboard
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::dashboard::render_dashboard(app, f);
}

pub fn loading(app: &App, f: &mut Frame<'_>) {
    screens::loading::render_loading(app.loader.source(), f);
}
