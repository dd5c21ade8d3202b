//! Abtastung von Kurvendefinitionen zu geordneten Stützpunkt-Folgen.
//!
//! Liefert nur Punkte; ob genug Punkte für einen Schieberegler entstehen,
//! entscheidet `CurveSampleSet::new`.

use super::options::{SamplingOptions, MAX_CURVE_SAMPLES};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Geometrische Definition eines Reglerpfads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveShape {
    /// Offener Linienzug, wird gleichmäßig nachabgetastet.
    Polyline { points: Vec<Vec2> },
    /// Quadratische Bézier-Kurve.
    Quadratic { start: Vec2, control: Vec2, end: Vec2 },
    /// Kubische Bézier-Kurve.
    Cubic {
        start: Vec2,
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
    },
    /// Catmull-Rom-Spline durch alle Punkte.
    CatmullRom { points: Vec<Vec2> },
}

impl Default for CurveShape {
    /// Flacher Bogen über 300×150 Pixel.
    fn default() -> Self {
        Self::Cubic {
            start: Vec2::new(20.0, 150.0),
            control1: Vec2::new(80.0, 20.0),
            control2: Vec2::new(220.0, 20.0),
            end: Vec2::new(280.0, 150.0),
        }
    }
}

impl CurveShape {
    /// Definierende Punkte (Kontroll- bzw. Durchgangspunkte) in Definitionsreihenfolge.
    pub fn control_points(&self) -> Vec<Vec2> {
        match self {
            Self::Polyline { points } | Self::CatmullRom { points } => points.clone(),
            Self::Quadratic {
                start,
                control,
                end,
            } => vec![*start, *control, *end],
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => vec![*start, *control1, *control2, *end],
        }
    }

    /// Index des ersten Kontrollpunkts mit NaN- oder unendlicher Koordinate.
    pub fn first_non_finite_point(&self) -> Option<usize> {
        self.control_points().iter().position(|p| !p.is_finite())
    }

    /// Tastet die Kurve ab, Punkte in Kurvenreihenfolge.
    pub fn sample(&self, options: &SamplingOptions) -> Vec<Vec2> {
        match self {
            Self::Polyline { points } => {
                resample_by_distance(points, options.max_segment_length)
            }
            Self::Quadratic {
                start,
                control,
                end,
            } => arc_length_positions(
                |t| quadratic_bezier(*start, *control, *end, t),
                options.max_segment_length,
                options.lut_samples,
            ),
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => arc_length_positions(
                |t| cubic_bezier(*start, *control1, *control2, *end, t),
                options.max_segment_length,
                options.lut_samples,
            ),
            Self::CatmullRom { points } => catmull_rom_chain(points, options.samples_per_segment),
        }
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Anzahl gleich langer Abschnitte für `length`, begrenzt auf `MAX_CURVE_SAMPLES`.
fn segment_count(length: f32, max_segment_length: f32) -> usize {
    ((length / max_segment_length).ceil().max(1.0) as usize).min(MAX_CURVE_SAMPLES)
}

/// Gleichmäßig (nach Bogenlänge) verteilte Punkte einer parametrischen Kurve.
///
/// Die Bogenlänge wird über eine Tabelle mit `lut_samples` Sehnen angenähert,
/// der Abstand benachbarter Punkte ist höchstens `max_segment_length`.
pub fn arc_length_positions(
    eval: impl Fn(f32) -> Vec2,
    max_segment_length: f32,
    lut_samples: usize,
) -> Vec<Vec2> {
    let lut_samples = lut_samples.max(1);
    let start = eval(0.0);

    let mut arc_lengths = Vec::with_capacity(lut_samples + 1);
    let mut prev = start;
    let mut cumulative = 0.0f32;
    arc_lengths.push(0.0f32);
    for i in 1..=lut_samples {
        let p = eval(i as f32 / lut_samples as f32);
        cumulative += prev.distance(p);
        arc_lengths.push(cumulative);
        prev = p;
    }

    let total_length = cumulative;
    if total_length < f32::EPSILON || max_segment_length <= 0.0 {
        return vec![start];
    }

    let segment_count = segment_count(total_length, max_segment_length);
    let target_spacing = total_length / segment_count as f32;

    let mut positions = Vec::with_capacity(segment_count + 1);
    positions.push(start);
    for seg in 1..segment_count {
        let target_length = seg as f32 * target_spacing;
        let idx = arc_lengths
            .partition_point(|&len| len < target_length)
            .clamp(1, lut_samples);

        let len_before = arc_lengths[idx - 1];
        let len_after = arc_lengths[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (target_length - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        positions.push(eval(((idx - 1) as f32 + frac) / lut_samples as f32));
    }
    positions.push(eval(1.0));
    positions
}

/// Catmull-Rom-Kette durch `points` mit gespiegelten Phantom-Punkten an den Rändern.
///
/// `samples_per_segment` Punkte je Segment (insgesamt höchstens `MAX_CURVE_SAMPLES`),
/// der Endpunkt wird einmal angehängt.
pub fn catmull_rom_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }
    let samples_per_segment = samples_per_segment.clamp(1, (MAX_CURVE_SAMPLES / (n - 1)).max(1));

    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);
    for seg in 0..n - 1 {
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p0 = if seg == 0 {
            2.0 * p1 - p2
        } else {
            points[seg - 1]
        };
        let p3 = if seg + 2 < n {
            points[seg + 2]
        } else {
            2.0 * p2 - p1
        };

        // p(t) = a + b·t + c·t² + d·t³
        let a = p1;
        let b = 0.5 * (p2 - p0);
        let c = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
        let d = 0.5 * (p3 - p0) + 1.5 * (p1 - p2);
        for i in 0..samples_per_segment {
            let t = i as f32 / samples_per_segment as f32;
            result.push(a + t * (b + t * (c + t * d)));
        }
    }
    result.push(points[n - 1]);
    result
}

/// Verteilt Punkte gleichmäßig (Bogenlänge) entlang eines Linienzugs.
pub fn resample_by_distance(polyline: &[Vec2], max_segment_length: f32) -> Vec<Vec2> {
    let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) else {
        return Vec::new();
    };
    if polyline.len() < 2 {
        return polyline.to_vec();
    }

    let total: f32 = polyline.windows(2).map(|w| w[0].distance(w[1])).sum();
    if total < f32::EPSILON || max_segment_length <= 0.0 {
        return vec![first];
    }

    let segment_count = segment_count(total, max_segment_length);
    let spacing = total / segment_count as f32;

    let mut result = Vec::with_capacity(segment_count + 1);
    result.push(first);

    let mut poly_idx = 0;
    // bereits verbrauchte Strecke im aktuellen Segment
    let mut consumed = 0.0f32;
    for _ in 1..segment_count {
        let mut needed = spacing;
        while poly_idx + 1 < polyline.len() {
            let seg_len = polyline[poly_idx].distance(polyline[poly_idx + 1]);
            let available = seg_len - consumed;
            if available >= needed {
                consumed += needed;
                result.push(polyline[poly_idx].lerp(polyline[poly_idx + 1], consumed / seg_len));
                break;
            }
            needed -= available;
            consumed = 0.0;
            poly_idx += 1;
        }
    }

    result.push(last);
    result
}
