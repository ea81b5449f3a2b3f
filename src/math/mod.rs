//! Mathematical utilities for solution rendering

/// HSL color conversion and piece palette generation
pub mod color;
