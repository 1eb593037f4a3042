//! Domain layer: the page schema, its widgets, and the demo content table.

pub mod demo;
pub mod dictionary;
pub mod error;
pub mod layout;
pub mod page;
pub mod types;
pub mod widgets;
