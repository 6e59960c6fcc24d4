pub mod grid;
pub mod symbol;

pub use grid::ModuleGrid;
pub use symbol::{Symbol, Version};
