pub mod classifier;
pub mod config;
pub mod discovery;
pub mod naming;
pub mod sink;
pub mod splitter;

pub use classifier::*;
pub use config::*;
pub use discovery::*;
pub use naming::*;
pub use sink::*;
pub use splitter::*;
