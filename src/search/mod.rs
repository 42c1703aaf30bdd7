//! Combination search orchestration.
//!
//! Responsibilities:
//!
//! - enumerate resistor pairs for the selected mode and score them (`combinations`)
//! - order scored records deterministically and keep the best N (`ranking`)

pub mod combinations;
pub mod ranking;

pub use combinations::*;
pub use ranking::*;
