//! Missions-Wegpunkte und die Lesezugriffs-Schnittstelle des Pfadgenerators.

use serde::{Deserialize, Serialize};

use super::MissionAction;

/// Ein Wegpunkt einer Mission.
///
/// Positionen sind geographisch in Grad. Die Bedeutung von `param1`–`param4`
/// hängt von der Aktion ab: `param1` ist die Haltezeit am Wegpunkt,
/// `param2` der Orbit-Radius bei den Loiter-Varianten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Breitengrad in Grad
    pub latitude: f64,
    /// Längengrad in Grad
    pub longitude: f64,
    /// Missions-Kommando
    pub action: MissionAction,
    /// Aktions-Parameter 1 (Haltezeit in Sekunden)
    pub param1: f32,
    /// Aktions-Parameter 2 (Orbit-Radius in Metern bei Loiter)
    pub param2: f32,
    /// Aktions-Parameter 3
    pub param3: f32,
    /// Aktions-Parameter 4
    pub param4: f32,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt mit Null-Parametern.
    pub fn new(latitude: f64, longitude: f64, action: MissionAction) -> Self {
        Self {
            latitude,
            longitude,
            action,
            param1: 0.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
        }
    }

    /// Setzt die Haltezeit (param1) und gibt den Wegpunkt zurück.
    pub fn with_hold_time(mut self, seconds: f32) -> Self {
        self.param1 = seconds;
        self
    }

    /// Orbit-Radius in Metern (param2, nur bei Loiter-Aktionen belegt).
    pub fn orbit_radius(&self) -> f32 {
        self.param2
    }
}

/// Lesezugriff des Pfadgenerators auf einen Wegpunkt.
///
/// Die Missionsliste gehört einem externen Modul; der Generator braucht nur
/// Position, Aktion und Haltezeit. Eigene Missions-Item-Typen binden sich
/// über dieses Trait an, ohne nach `Waypoint` konvertieren zu müssen.
pub trait PathWaypoint {
    /// Breitengrad in Grad
    fn latitude(&self) -> f64;
    /// Längengrad in Grad
    fn longitude(&self) -> f64;
    /// Missions-Kommando
    fn action(&self) -> MissionAction;
    /// Haltezeit am Wegpunkt in Sekunden (param1)
    fn hold_time(&self) -> f32;

    /// Liegt der Wegpunkt exakt auf dem geographischen Ursprung?
    ///
    /// (0, 0) ist der Platzhalter für eine noch nicht gesetzte Home-Position
    /// und darf nie Anker der Vorschau werden. Der Vergleich ist exakt, der
    /// Platzhalter wird wörtlich mit 0 belegt.
    fn is_origin(&self) -> bool {
        self.latitude() == 0.0 && self.longitude() == 0.0
    }
}

impl PathWaypoint for Waypoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn action(&self) -> MissionAction {
        self.action
    }

    fn hold_time(&self) -> f32 {
        self.param1
    }
}
