//! `resistor-combinator` library crate.
//!
//! The binary (`rct`) is a thin wrapper around this library so that:
//!
//! - the search and formatting logic is testable without spawning processes
//! - the candidate/search/rank pipeline can be reused by other front-ends

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod search;
pub mod series;
