// Core data models for Orderlens
// These structs represent one refresh cycle's fetched and shaped data

pub mod workorder;

pub use workorder::*;
