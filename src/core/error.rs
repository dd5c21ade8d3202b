//! Fehlertypen des Kurven-Schiebereglers.

use thiserror::Error;

/// Fehler bei Konfiguration und Positionsverfolgung.
///
/// Alle Varianten sind deterministische Bedienfehler des Aufrufers,
/// kein Wiederholungsversuch ändert das Ergebnis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// Punktfolge taugt nicht als Reglerpfad.
    #[error("Ungültige Kurve: {0}")]
    InvalidCurve(CurveDefect),
    /// Index liegt nicht in `0..len`.
    #[error("Stützpunkt-Index {index} außerhalb des gültigen Bereichs 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Tracker ohne installierte Kurve benutzt.
    #[error("Keine Kurve konfiguriert")]
    NotConfigured,
}

/// Grund, warum eine Kurve abgelehnt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveDefect {
    /// Weniger als 2 Stützpunkte.
    #[error("mindestens 2 Stützpunkte nötig, erhalten: {count}")]
    TooFewPoints { count: usize },
    /// Punkt mit NaN- oder unendlicher Koordinate.
    #[error("Punkt {index} hat keine endlichen Koordinaten")]
    NonFinitePoint { index: usize },
}
