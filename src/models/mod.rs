pub mod config;
pub mod split;

pub use config::*;
pub use split::*;
