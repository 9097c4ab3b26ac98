pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod draw;
pub mod effects;
pub mod field;
pub mod input;
pub mod scene;
pub mod smoothing;
pub mod style;

pub use color::*;
pub use config::*;
pub use cursor::*;
pub use draw::*;
pub use effects::*;
pub use field::*;
pub use input::*;
pub use scene::*;
pub use smoothing::*;
pub use style::*;
