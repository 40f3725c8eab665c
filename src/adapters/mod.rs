//! Adapters implementing the ports and the user-facing surface.

pub mod report;
pub mod terminal;
