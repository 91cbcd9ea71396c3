//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod fix;
pub mod judge;
pub mod score;
