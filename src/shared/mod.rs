//! Geteilte, schichtneutrale Bausteine.
//!
//! Konfiguration und Kurvenabtastung, nutzbar aus `app` und der Binary
//! ohne Abhängigkeit auf den Tracker-Zustand.

pub mod curve_sampling;
pub mod options;

pub use curve_sampling::CurveShape;
pub use options::{SamplingOptions, SliderOptions, MAX_CURVE_SAMPLES};
