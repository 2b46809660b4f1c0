pub mod parallax;
pub mod reveal;

pub use parallax::*;
pub use reveal::*;
