pub mod digest;
pub mod types;

mod bundle;
mod debundle;

pub use digest::*;
pub use types::*;
