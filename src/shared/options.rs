//! Zentrale Konfiguration der Flugpfad-Vorschau.
//!
//! `PreviewOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Spline-Abtastung ────────────────────────────────────────────────

/// Abtastschritte pro Hermite-Segment (Punktzahl = Schritte + 1).
pub const SPLINE_SAMPLE_STEPS: usize = 100;

// ── Wegpunkt-Filter ─────────────────────────────────────────────────

/// Takeoff-Wegpunkte in die Vorschau aufnehmen?
pub const INCLUDE_TAKEOFF: bool = false;

/// Alle zur Laufzeit änderbaren Optionen der Flugpfad-Vorschau.
/// Wird als `flight_path_preview.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewOptions {
    /// Abtastschritte pro Hermite-Segment (Punktzahl = Schritte + 1)
    pub spline_sample_steps: usize,
    /// Takeoff-Wegpunkte in die Vorschau aufnehmen
    #[serde(default = "default_include_takeoff")]
    pub include_takeoff: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            spline_sample_steps: SPLINE_SAMPLE_STEPS,
            include_takeoff: INCLUDE_TAKEOFF,
        }
    }
}

/// Serde-Default für `include_takeoff` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_include_takeoff() -> bool {
    INCLUDE_TAKEOFF
}

impl PreviewOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
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
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("flight_path_preview"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("flight_path_preview.toml")
    }
}
