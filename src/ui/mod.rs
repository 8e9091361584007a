// UI module for the Propolis Monitor
//
// This module organizes the UI into separate components:
// - `top_panel`: Action buttons and request status
// - `debug_panel`: The debug display surface
// - `app_state`: Application state and main update loop

pub mod app_state;
pub mod debug_panel;
pub mod top_panel;

pub use app_state::AppState;
