//! Placement resolution for floating elements
//!
//! This module picks a side and alignment for a popper next to its reference
//! box, walking configurable fallback orders until one fits the container.

pub mod config;
pub mod flip;
pub mod lexer;
pub mod resolver;
pub mod types;

pub use config::{ConfigOverrides, PlacementConfig};
pub use flip::{AlignmentFlipOrder, DirectionFlipOrder};
pub use resolver::resolve;
pub use types::*;
