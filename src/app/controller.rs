//! Der Schieberegler: verarbeitet Intents, hält Tracker und Beobachter.

use super::observer::{ObserverId, ObserverRegistry, PositionObserver};
use super::SliderIntent;
use crate::core::{CurveDefect, CurvePoint, CurveSampleSet, PositionTracker, SliderError};
use crate::shared::{CurveShape, SamplingOptions};
use glam::Vec2;
use std::rc::Rc;

/// Schieberegler mit kurvengebundenem Griff.
///
/// Besitzt Sample-Set und Tracker exklusiv. Der Typ ist durch die `Rc`-basierte
/// Beobachter-Registrierung weder `Send` noch `Sync`: alle Aufrufe laufen auf
/// dem Thread, der die Gesten-Events liefert.
#[derive(Debug, Default)]
pub struct CurveSlider {
    tracker: PositionTracker,
    observers: ObserverRegistry,
    sampling: SamplingOptions,
}

impl CurveSlider {
    /// Erstellt einen Regler ohne Kurve.
    pub fn new(sampling: SamplingOptions) -> Self {
        Self {
            tracker: PositionTracker::new(),
            observers: ObserverRegistry::new(),
            sampling,
        }
    }

    /// Verarbeitet einen Intent. Liefert den gemeldeten Wert, falls einer entstand.
    pub fn handle_intent(&mut self, intent: SliderIntent) -> Result<Option<f32>, SliderError> {
        match intent {
            SliderIntent::CurveAssigned { points } => self.set_curve(points).map(Some),
            SliderIntent::ShapeAssigned { shape } => self.set_shape(&shape).map(Some),
            SliderIntent::DragBegan => self.drag_began().map(|()| None),
            SliderIntent::DragChanged { translation }
            | SliderIntent::DragEnded { translation }
            | SliderIntent::DragCancelled { translation } => self.drag_moved(translation).map(Some),
            SliderIntent::ValueRequested { value } => self.set_value(value).map(Some),
        }
    }

    /// Installiert eine neue Punktfolge und setzt den Griff an den Anfang.
    ///
    /// Bei ungültiger Folge bleibt die bisherige Kurve samt Index erhalten.
    pub fn set_curve(&mut self, points: Vec<CurvePoint>) -> Result<f32, SliderError> {
        let samples =
            CurveSampleSet::new(points).inspect_err(|e| log::warn!("Kurve abgelehnt: {}", e))?;
        let value = self.tracker.install(samples)?;
        self.observers.notify(value);
        Ok(value)
    }

    /// Tastet `shape` ab und installiert das Ergebnis.
    ///
    /// Nicht-endliche Kontrollpunkte werden vor dem Abtasten abgelehnt,
    /// der Index im Fehler bezieht sich auf `shape.control_points()`.
    pub fn set_shape(&mut self, shape: &CurveShape) -> Result<f32, SliderError> {
        if let Some(index) = shape.first_non_finite_point() {
            let err = SliderError::InvalidCurve(CurveDefect::NonFinitePoint { index });
            log::warn!("Kurve abgelehnt: {}", err);
            return Err(err);
        }
        let points = shape.sample(&self.sampling);
        log::debug!("Kurve abgetastet: {} Punkte", points.len());
        self.set_curve(points)
    }

    /// Beginn einer Geste: Anker an die aktuelle Griffposition.
    pub fn drag_began(&mut self) -> Result<(), SliderError> {
        let center = self.tracker.handle_position()?;
        self.tracker.on_drag_begin(center)?;
        log::debug!("Drag beginnt bei ({:.1}, {:.1})", center.x, center.y);
        Ok(())
    }

    /// Verarbeitet ein Gesten-Delta (Bewegung, Ende oder Abbruch).
    pub fn drag_moved(&mut self, translation: Vec2) -> Result<f32, SliderError> {
        let value = self.tracker.on_drag_delta(translation)?;
        self.observers.notify(value);
        Ok(value)
    }

    /// Setzt den Griff zurück an den Kurvenanfang und meldet 0.0.
    pub fn initialize_position(&mut self) -> Result<f32, SliderError> {
        let value = self.tracker.initialize_position()?;
        self.observers.notify(value);
        Ok(value)
    }

    /// Setzt den Griff auf den Stützpunkt `index`.
    pub fn place_at(&mut self, index: usize) -> Result<f32, SliderError> {
        let value = self.tracker.place_at(index)?;
        self.observers.notify(value);
        Ok(value)
    }

    /// Setzt den Griff programmatisch auf den nächstgelegenen Wert.
    pub fn set_value(&mut self, value: f32) -> Result<f32, SliderError> {
        let snapped = self.tracker.set_value(value)?;
        self.observers.notify(snapped);
        Ok(snapped)
    }

    /// Meldet einen Beobachter an (ohne ihn zu besitzen).
    pub fn register_observer<O: PositionObserver + 'static>(
        &mut self,
        observer: &Rc<O>,
    ) -> ObserverId {
        self.observers.register(observer)
    }

    /// Meldet einen Beobachter ab.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Aktueller normierter Wert.
    pub fn value(&self) -> Result<f32, SliderError> {
        self.tracker.current_value()
    }

    /// Aktueller Stützpunkt-Index.
    pub fn current_index(&self) -> Result<usize, SliderError> {
        self.tracker.current_index()
    }

    /// Zielkoordinate für das Rendering des Griffs.
    pub fn handle_position(&self) -> Result<CurvePoint, SliderError> {
        self.tracker.handle_position()
    }

    /// Aktives Sample-Set.
    pub fn samples(&self) -> Result<&CurveSampleSet, SliderError> {
        self.tracker.samples()
    }

    /// Abtast-Optionen für `set_shape`.
    pub fn sampling(&self) -> &SamplingOptions {
        &self.sampling
    }
}
