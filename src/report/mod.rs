//! Reporting utilities: shorthand notation, result rows, and terminal tables.

pub mod format;
pub mod notation;

pub use format::*;
pub use notation::*;
