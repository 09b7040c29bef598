//! Flugpfad-Vorschau für Missions-Wegpunkte.
//! Erzeugt aus einer Missionsliste die Zeichenbefehle der 2D-Kartenvorschau.

pub mod core;
pub mod path;
pub mod shared;

pub use core::{MissionAction, PathWaypoint, Waypoint, PATH_ACTIONS};
pub use path::{build_flight_path, FlightPath, PathCommand};
pub use shared::PreviewOptions;
