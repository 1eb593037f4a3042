//! Application layer: the commands the binary dispatches to.

pub mod backgrounds;
pub mod check;
pub mod error;
pub mod generate;
pub mod localize;
pub mod translate;
