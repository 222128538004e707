pub mod config;
pub mod decode;

pub use config::*;
pub use decode::*;
