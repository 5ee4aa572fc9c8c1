pub mod item;
pub mod responses;

pub use item::*;
pub use responses::*;
