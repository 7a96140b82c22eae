pub mod config;
pub mod variant;

pub use config::*;
pub use variant::*;
