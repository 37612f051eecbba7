//! Core types for decoded telemetry values.
//!
//! The decoder's output is a mapping from field names to [`Value`], a tagged
//! variant covering every shape the simulator's records produce: 32-bit
//! scalars, fixed-width UTF-16 strings, and fixed-size numeric arrays. Shaped
//! fields keep their declared dimensions via [`Matrix`] so downstream numeric
//! consumers can address elements by `(row, col)`.

mod value;

pub use value::{Matrix, Value};
