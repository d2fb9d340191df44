pub mod codec;
pub mod kind;

pub use codec::*;
pub use kind::*;
