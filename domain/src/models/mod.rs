pub mod primitives;
mod item_type;

pub use item_type::*;
