pub mod error;
pub mod item;

pub use error::{PersonaError, Result};
pub use item::{ItemKind, RawItem, UserActivity};
