mod lookup;

pub use lookup::*;
