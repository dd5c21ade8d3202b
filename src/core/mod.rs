//! Core-Domänentypen: Stützpunkt-Set, Positions-Tracker, Fehler.

mod error;
pub mod sample_set;
pub mod tracker;

pub use error::{CurveDefect, SliderError};
pub use sample_set::{CurvePoint, CurveSampleSet};
pub use tracker::PositionTracker;
