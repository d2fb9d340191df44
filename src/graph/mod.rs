pub mod layout;
pub mod model;

pub use layout::*;
pub use model::*;
