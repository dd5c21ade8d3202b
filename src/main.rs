//! Kurven-Schieberegler (Headless-Demo).
//!
//! Lädt die Optionen, tastet die konfigurierte Kurve ab und spielt eine
//! synthetische Drag-Geste vom Kurvenanfang zum Kurvenende ab.

use curve_slider::{CurveSlider, SliderIntent, SliderOptions};
use glam::Vec2;
use std::rc::Rc;

/// Anzahl der Gesten-Events der Demo-Geste.
const DEMO_DRAG_STEPS: usize = 40;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Kurven-Schieberegler v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = SliderOptions::load_from_file(&SliderOptions::config_path());
    let mut slider = CurveSlider::new(options.sampling.clone());

    let observer = Rc::new(|value: f32| log::info!("Position: {:.3}", value));
    slider.register_observer(&observer);

    slider.handle_intent(SliderIntent::ShapeAssigned {
        shape: options.curve.clone(),
    })?;

    let samples = slider.samples()?;
    let start = samples.points()[0];
    let end = samples.points()[samples.len() - 1];
    let step = (end - start) / DEMO_DRAG_STEPS as f32;

    slider.handle_intent(SliderIntent::DragBegan)?;
    for _ in 1..DEMO_DRAG_STEPS {
        slider.handle_intent(SliderIntent::DragChanged { translation: step })?;
    }
    slider.handle_intent(SliderIntent::DragEnded { translation: step })?;

    let handle: Vec2 = slider.handle_position()?;
    log::info!(
        "Griff endet bei Index {} ({:.1}, {:.1}), Wert {:.3}",
        slider.current_index()?,
        handle.x,
        handle.y,
        slider.value()?
    );
    Ok(())
}
