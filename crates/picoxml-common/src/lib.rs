//! Common utilities for the picoxml markup toolkit.
//!
//! This crate provides shared infrastructure used by the other picoxml
//! components:
//! - **Warning System** - colored terminal output for tolerated oddities

pub mod warning;
