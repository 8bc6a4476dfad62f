pub mod collision;
pub mod input;
pub mod kick;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use kick::*;
pub use movement::*;
pub use scoring::*;
