pub mod backends;
pub mod cli;
pub mod color;
pub mod error;
pub mod model;
pub mod processor;
pub mod protocol;
pub mod store;
pub mod theme;
pub mod tui;
