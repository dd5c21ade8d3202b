//! Application-Layer: Regler-Steuerung, Intents und Beobachter.

pub mod controller;
mod intent;
pub mod observer;

pub use controller::CurveSlider;
pub use intent::SliderIntent;
pub use observer::{ObserverId, ObserverRegistry, PositionObserver};
