//! Data types for the grid: column tree, options, hooks and row data.

mod column;
mod data;
mod hooks;
mod options;

pub use column::*;
pub use data::*;
pub use hooks::*;
pub use options::*;
