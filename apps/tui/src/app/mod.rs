// App module for covid_dashboard
// Holds dashboard state and maps key presses onto it

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, Focus};
