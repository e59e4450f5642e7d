//! Command implementations

mod check;
mod info;
mod raw;

pub use check::check;
pub use info::{priority, type_name};
pub use raw::raw;
