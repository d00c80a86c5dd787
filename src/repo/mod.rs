pub mod workorder;

pub use workorder::*;
