mod base;

pub mod make;
pub mod uci;

pub use base::*;
pub use make::{Make, Uci, Unchecked};
