//! IntraVox demo content generator.
//!
//! Builds the demo page table (`domain`), writes it into a language tree
//! (`application::generate`), and carries the maintenance commands that keep
//! existing trees in shape.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
