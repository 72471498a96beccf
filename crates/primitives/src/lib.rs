pub use alloy_primitives;
pub use alloy_primitives::Address;

/// Default locations of the project files
pub mod dirs;

pub mod fs;

pub mod consts;
