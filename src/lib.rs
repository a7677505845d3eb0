//! teldir: a telephone directory of people and businesses
//!
//! Contacts live in memory, keyed and sorted by name, and can be saved to
//! and loaded from a flat `name,phone` file.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
