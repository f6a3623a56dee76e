//! Conversions from UI toolkit events into `KeyboardEvent`.

#[cfg(feature = "crossterm")]
pub mod crossterm;
