pub mod document;
pub mod settings;

pub use document::*;
pub use settings::*;
