//! Eingabe-Events des Schiebereglers (Konfiguration und Drag-Gesten).

use crate::shared::CurveShape;
use glam::Vec2;

/// Intents aus Gesten-Erkennung und Konfiguration.
///
/// `translation` ist jeweils das Delta seit dem vorherigen Event derselben Geste.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderIntent {
    /// Neue, bereits abgetastete Punktfolge
    CurveAssigned { points: Vec<Vec2> },
    /// Neue Kurvendefinition, wird mit den Abtast-Optionen diskretisiert
    ShapeAssigned { shape: CurveShape },
    /// Geste auf dem Griff beginnt
    DragBegan,
    /// Geste bewegt sich weiter
    DragChanged { translation: Vec2 },
    /// Geste endet regulär
    DragEnded { translation: Vec2 },
    /// Geste wurde abgebrochen (wie Ende behandelt, kein Rollback)
    DragCancelled { translation: Vec2 },
    /// Programmatisches Setzen eines Werts in [0, 1]
    ValueRequested { value: f32 },
}
