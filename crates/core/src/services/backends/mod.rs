pub mod addr2line;

pub use addr2line::{Addr2LineResolver, DEFAULT_RESOLVER};
