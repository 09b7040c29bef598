//! Geteilte Bausteine für layer-übergreifende Verträge.
//!
//! Enthält die reine Hermite-Geometrie und die Laufzeit-Optionen,
//! um direkte Abhängigkeiten zwischen den Layern zu vermeiden.

pub mod hermite;
pub mod options;

pub use options::PreviewOptions;
pub use options::{INCLUDE_TAKEOFF, SPLINE_SAMPLE_STEPS};
