//! Domain layer: entities and the filter transform
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod filter;

pub use entities::*;
pub use filter::filter_count_data;
