//! Missions-Kommandos der Wegpunkte (MAVLink-kompatible Rohwerte).

use serde::{Deserialize, Serialize};

/// Kommando eines Missions-Wegpunkts.
///
/// Die Rohwerte entsprechen der MAV_CMD-Enumeration des Missionsprotokolls;
/// unbekannte Werte bleiben über `Other` verlustfrei erhalten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionAction {
    /// Normaler Wegpunkt (MAV_CMD_NAV_WAYPOINT)
    Waypoint,
    /// Unbegrenztes Kreisen (MAV_CMD_NAV_LOITER_UNLIM)
    LoiterUnlimited,
    /// Kreisen mit Rundenzahl (MAV_CMD_NAV_LOITER_TURNS)
    LoiterTurns,
    /// Kreisen mit Zeitvorgabe (MAV_CMD_NAV_LOITER_TIME)
    LoiterTime,
    /// Rückkehr zur Home-Position (MAV_CMD_NAV_RETURN_TO_LAUNCH)
    ReturnToLaunch,
    /// Landung (MAV_CMD_NAV_LAND)
    Land,
    /// Start (MAV_CMD_NAV_TAKEOFF)
    Takeoff,
    /// Kreisen bis zur Zielhöhe (MAV_CMD_NAV_LOITER_TO_ALT)
    LoiterToAltitude,
    /// Spline-Wegpunkt (MAV_CMD_NAV_SPLINE_WAYPOINT)
    SplineWaypoint,
    /// Kamera-Zielpunkt (MAV_CMD_DO_SET_ROI)
    RegionOfInterest,
    /// Unbekanntes Kommando, Rohwert bleibt erhalten
    Other(u16),
}

/// Aktionen, die als Kurvenpunkte in die Pfad-Vorschau eingehen.
///
/// Takeoff fehlt bewusst: ob Start-Wegpunkte mitgezeichnet werden, steuert
/// `PreviewOptions::include_takeoff`.
pub const PATH_ACTIONS: [MissionAction; 6] = [
    MissionAction::Waypoint,
    MissionAction::LoiterUnlimited,
    MissionAction::LoiterTurns,
    MissionAction::LoiterToAltitude,
    MissionAction::LoiterTime,
    MissionAction::Land,
];

impl MissionAction {
    /// Erstellt die Aktion aus dem MAV_CMD-Rohwert.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            16 => Self::Waypoint,
            17 => Self::LoiterUnlimited,
            18 => Self::LoiterTurns,
            19 => Self::LoiterTime,
            20 => Self::ReturnToLaunch,
            21 => Self::Land,
            22 => Self::Takeoff,
            31 => Self::LoiterToAltitude,
            82 => Self::SplineWaypoint,
            201 => Self::RegionOfInterest,
            other => Self::Other(other),
        }
    }

    /// Liefert den MAV_CMD-Rohwert der Aktion.
    pub fn raw(self) -> u16 {
        match self {
            Self::Waypoint => 16,
            Self::LoiterUnlimited => 17,
            Self::LoiterTurns => 18,
            Self::LoiterTime => 19,
            Self::ReturnToLaunch => 20,
            Self::Land => 21,
            Self::Takeoff => 22,
            Self::LoiterToAltitude => 31,
            Self::SplineWaypoint => 82,
            Self::RegionOfInterest => 201,
            Self::Other(raw) => raw,
        }
    }

    /// Wegpunkte, die das Fahrzeug durchfliegt statt anzuhalten.
    ///
    /// Nur diese kommen als Tangenten-Quelle eines Spline-Segments infrage.
    pub fn is_fly_through(self) -> bool {
        matches!(self, Self::Waypoint | Self::SplineWaypoint)
    }

    /// Geht ein Wegpunkt mit dieser Aktion als Kurvenpunkt in die Vorschau ein?
    ///
    /// `include_takeoff` nimmt zusätzlich Takeoff-Wegpunkte auf.
    pub fn is_path_action(self, include_takeoff: bool) -> bool {
        PATH_ACTIONS.contains(&self) || (include_takeoff && self == Self::Takeoff)
    }
}
