//! Application state module

mod forms;
pub mod options;

pub use forms::*;
