pub mod audio;
pub mod catalog;
pub mod components;
pub mod config;
pub mod game;
pub mod model;
pub mod state;
pub mod util;
