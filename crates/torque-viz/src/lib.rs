//! Visualization selection for query results.
//!
//! Maps a decoded query result to a renderer-agnostic instruction: which
//! chart to draw, which fields feed its axes, or what to show instead when
//! there is nothing to chart.

pub mod selector;

pub use selector::{select, RenderInstruction, NO_DATA_MESSAGE};
