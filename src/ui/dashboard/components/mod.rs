//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod clients;
pub mod footer;
pub mod header;
pub mod logs;
pub mod overlays;
