//! Zentrale Konfiguration für den Kurven-Schieberegler.
//!
//! `SliderOptions` enthält die zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::curve_sampling::CurveShape;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Abtastung ───────────────────────────────────────────────────────

/// Maximaler Abstand zweier Stützpunkte (Pixel).
pub const MAX_SEGMENT_LENGTH: f32 = 2.0;
/// Stützpunkte je Catmull-Rom-Segment.
pub const SAMPLES_PER_SEGMENT: usize = 16;
/// Obergrenze der Abschnitte je abgetasteter Kurve.
pub const MAX_CURVE_SAMPLES: usize = 100_000;
/// Auflösung der Bogenlängen-Tabelle für Bézier-Kurven.
pub const ARC_LENGTH_LUT_SAMPLES: usize = 256;

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "curve_slider.toml";

/// Parameter der Kurvenabtastung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
    /// Maximaler Punktabstand für Bézier-Kurven und Linienzüge
    pub max_segment_length: f32,
    /// Punkte je Catmull-Rom-Segment
    pub samples_per_segment: usize,
    /// Anzahl Sehnen der Bogenlängen-Tabelle
    pub lut_samples: usize,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            max_segment_length: MAX_SEGMENT_LENGTH,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            lut_samples: ARC_LENGTH_LUT_SAMPLES,
        }
    }
}

/// Laufzeit-Optionen (als `curve_slider.toml` gespeichert).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderOptions {
    // ── Abtastung ────────────────────────────────────────────────
    #[serde(default)]
    pub sampling: SamplingOptions,

    // ── Demo ─────────────────────────────────────────────────────
    /// Kurve, die die Binary beim Start lädt
    #[serde(default)]
    pub curve: CurveShape,
}

impl SliderOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("curve-slider"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
