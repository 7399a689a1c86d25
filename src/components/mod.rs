pub mod app;
pub mod board_view;
pub mod clue_feed;
pub mod connection_canvas;
pub mod game_over_screen;
pub mod hud;
pub mod menu_screen;
pub mod node_button;
pub mod settings_modal;
pub mod transition_screen;
pub mod victory_screen;

pub use app::App;
