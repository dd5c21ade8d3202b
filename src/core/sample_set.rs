//! Diskretisierter Kurvenverlauf mit vorberechneter Wertetabelle.

use super::{CurveDefect, SliderError};
use glam::Vec2;

/// Ein Stützpunkt auf der Kurve (Pixel-Koordinaten).
pub type CurvePoint = Vec2;

/// Unveränderliche, geordnete Folge von Stützpunkten plus normierter Wert je Index.
///
/// `points` und `values` sind ko-indiziert. Index 0 ist der Kurvenanfang (Wert 0.0),
/// Index N-1 das Kurvenende (Wert 1.0). Nach dem Bau wird nichts mehr verändert;
/// bei einer neuen Kurve wird das ganze Set ersetzt.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSampleSet {
    points: Vec<CurvePoint>,
    values: Vec<f32>,
}

impl CurveSampleSet {
    /// Minimale Anzahl an Stützpunkten.
    pub const MIN_POINTS: usize = 2;

    /// Baut ein Set aus einer geordneten Punktfolge.
    ///
    /// Innere Werte entstehen durch fortlaufendes Aufaddieren von `1/N`,
    /// die Endpunkte sind exakt 0.0 und 1.0. Punkte mit NaN- oder unendlichen
    /// Koordinaten werden abgelehnt, sonst würde der Abstandsvergleich der Suche kippen.
    pub fn new(points: Vec<CurvePoint>) -> Result<Self, SliderError> {
        let count = points.len();
        if count < Self::MIN_POINTS {
            return Err(SliderError::InvalidCurve(CurveDefect::TooFewPoints {
                count,
            }));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SliderError::InvalidCurve(CurveDefect::NonFinitePoint {
                index,
            }));
        }

        let step = 1.0 / count as f32;
        let mut values = Vec::with_capacity(count);
        values.push(0.0);
        let mut counter = 0.0f32;
        for _ in 1..count - 1 {
            counter += step;
            values.push(counter);
        }
        values.push(1.0);

        Ok(Self { points, values })
    }

    /// Anzahl der Stützpunkte (N).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`, ein gültiges Set hat mindestens 2 Punkte.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Stützpunkte in Kurvenreihenfolge.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Alle normierten Werte, ko-indiziert zu `points()`.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Stützpunkt an `index`.
    pub fn point_at(&self, index: usize) -> Result<CurvePoint, SliderError> {
        self.points
            .get(index)
            .copied()
            .ok_or(SliderError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Normierter Wert an `index`.
    pub fn value_at(&self, index: usize) -> Result<f32, SliderError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SliderError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// `(base + offset) mod N` mit mathematischem Modulo, Ergebnis immer in `0..N`.
    ///
    /// Der Indexraum wird für die Suche zyklisch behandelt: wer über ein Kurvenende
    /// hinausläuft, landet am anderen Ende. Nahe der Endpunkte kann der Griff deshalb
    /// auf die Gegenseite springen.
    pub fn wrap_index(&self, base: isize, offset: isize) -> usize {
        let n = self.len() as isize;
        (base.rem_euclid(n) + offset.rem_euclid(n)).rem_euclid(n) as usize
    }

    /// Abstand vom Punkt `target` zum Stützpunkt bei `base + offset` (zyklisch).
    pub(crate) fn distance_at(&self, target: Vec2, base: isize, offset: isize) -> f32 {
        target.distance(self.points[self.wrap_index(base, offset)])
    }

    /// Index des Stützpunkts, dessen Wert `value` am nächsten liegt.
    ///
    /// `value` wird auf [0, 1] begrenzt, bei Gleichstand gewinnt der kleinere Index.
    pub fn nearest_index_for_value(&self, value: f32) -> usize {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let idx = self.values.partition_point(|&v| v < value);
        if idx == 0 {
            return 0;
        }
        if idx >= self.values.len() {
            return self.values.len() - 1;
        }
        let below = value - self.values[idx - 1];
        let above = self.values[idx] - value;
        if below <= above {
            idx - 1
        } else {
            idx
        }
    }
}
