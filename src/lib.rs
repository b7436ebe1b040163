mod avatar;
mod common;
mod config;
mod game;
mod generator;
mod grid;
mod logging;
pub mod scores;
pub mod session;
pub mod ui;

pub use avatar::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use logging::init_logging;
