//! Kurven-Schieberegler: Griff rastet auf Stützpunkten eines beliebigen Kurvenverlaufs ein.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{CurveSlider, ObserverId, PositionObserver, SliderIntent};
pub use crate::core::{CurveDefect, CurvePoint, CurveSampleSet, PositionTracker, SliderError};
pub use crate::shared::{CurveShape, SamplingOptions, SliderOptions, MAX_CURVE_SAMPLES};
