pub mod config;
pub mod state;

pub use config::*;
pub use state::*;
