mod types;
mod loader;
mod defaults;
pub mod validation;

pub use types::*;
pub use loader::load_config;
