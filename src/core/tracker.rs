//! Positionsverfolgung des Griffs entlang der Stützpunkte.
//!
//! Pro Drag-Delta wird nur die lokale Umgebung des aktuellen Index betrachtet:
//! ist der aktuelle Stützpunkt näher als beide Nachbarn, bleibt der Griff stehen.
//! Sonst wird in die bessere Richtung gelaufen, solange der Abstand sinkt.

use super::{CurvePoint, CurveSampleSet, SliderError};
use glam::Vec2;

/// Zustand des Griffs: aktueller Stützpunkt-Index und Drag-Anker.
///
/// Alle Aufrufe erfolgen auf demselben logischen Thread; Drag-Deltas einer Geste
/// müssen in Ankunftsreihenfolge verarbeitet werden.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    samples: Option<CurveSampleSet>,
    /// Laufende Indexsumme, wird erst beim Nachschlagen normiert
    index: isize,
    drag_anchor: Vec2,
}

impl PositionTracker {
    /// Erstellt einen Tracker ohne Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, sobald ein Sample-Set installiert ist.
    pub fn is_configured(&self) -> bool {
        self.samples.is_some()
    }

    /// Aktives Sample-Set.
    pub fn samples(&self) -> Result<&CurveSampleSet, SliderError> {
        self.samples.as_ref().ok_or(SliderError::NotConfigured)
    }

    /// Ersetzt das Sample-Set vollständig und setzt den Griff an den Kurvenanfang.
    pub fn install(&mut self, samples: CurveSampleSet) -> Result<f32, SliderError> {
        log::info!("Kurve installiert: {} Stützpunkte", samples.len());
        self.samples = Some(samples);
        self.initialize_position()
    }

    /// Setzt den Griff auf den Kurvenanfang (Index 0) und liefert dessen Wert.
    pub fn initialize_position(&mut self) -> Result<f32, SliderError> {
        let samples = self.samples()?;
        let index = samples.wrap_index(0, 0);
        let anchor = samples.point_at(index)?;
        let value = samples.value_at(index)?;
        self.index = index as isize;
        self.drag_anchor = anchor;
        Ok(value)
    }

    /// Normierter aktueller Index in `0..N`.
    pub fn current_index(&self) -> Result<usize, SliderError> {
        Ok(self.samples()?.wrap_index(self.index, 0))
    }

    /// Normierter Wert des aktuellen Stützpunkts.
    pub fn current_value(&self) -> Result<f32, SliderError> {
        let samples = self.samples()?;
        samples.value_at(samples.wrap_index(self.index, 0))
    }

    /// Zielkoordinate für den sichtbaren Griff.
    pub fn handle_position(&self) -> Result<CurvePoint, SliderError> {
        let samples = self.samples()?;
        samples.point_at(samples.wrap_index(self.index, 0))
    }

    /// Aktueller, unbeschränkter Drag-Anker.
    pub fn drag_anchor(&self) -> Vec2 {
        self.drag_anchor
    }

    /// Beginn einer Drag-Geste: Anker auf die aktuelle Griffmitte setzen.
    pub fn on_drag_begin(&mut self, current_pixel_center: Vec2) -> Result<(), SliderError> {
        self.samples()?;
        self.drag_anchor = current_pixel_center;
        Ok(())
    }

    /// Verarbeitet ein Drag-Delta und liefert den neuen normierten Wert.
    pub fn on_drag_delta(&mut self, delta: Vec2) -> Result<f32, SliderError> {
        let samples = self.samples.as_ref().ok_or(SliderError::NotConfigured)?;
        if !delta.is_finite() {
            log::warn!("Nicht-endliches Drag-Delta ignoriert: {:?}", delta);
            return samples.value_at(samples.wrap_index(self.index, 0));
        }
        self.drag_anchor += delta;
        let target = self.drag_anchor;

        let prev = samples.distance_at(target, self.index, -1);
        let current = samples.distance_at(target, self.index, 0);
        let next = samples.distance_at(target, self.index, 1);

        if current <= prev && current <= next {
            return samples.value_at(samples.wrap_index(self.index, 0));
        }

        let prefer_prev = prev < next;
        let direction: isize = if prefer_prev { -1 } else { 1 };
        let mut best = if prefer_prev { prev } else { next };

        // Streng fallende Abstände besuchen jeden Index höchstens einmal
        let mut offset = direction;
        for _ in 0..samples.len() {
            let next_offset = offset + direction;
            let distance = samples.distance_at(target, self.index, next_offset);
            if distance >= best {
                break;
            }
            log::trace!("Abstieg: Offset {} → {} ({:.3})", offset, next_offset, distance);
            best = distance;
            offset = next_offset;
        }

        let from = samples.wrap_index(self.index, 0);
        self.index += offset;
        let to = samples.wrap_index(self.index, 0);
        log::debug!("Griff verschoben: Index {} → {} (Offset {})", from, to, offset);

        samples.value_at(to)
    }

    /// Setzt den Griff direkt auf `index` und den Drag-Anker auf dessen Punkt.
    pub fn place_at(&mut self, index: usize) -> Result<f32, SliderError> {
        let samples = self.samples()?;
        let anchor = samples.point_at(index)?;
        let value = samples.value_at(index)?;
        self.index = index as isize;
        self.drag_anchor = anchor;
        Ok(value)
    }

    /// Setzt den Griff auf den Stützpunkt mit dem nächstgelegenen Wert.
    pub fn set_value(&mut self, value: f32) -> Result<f32, SliderError> {
        let index = self.samples()?.nearest_index_for_value(value);
        self.place_at(index)
    }
}
