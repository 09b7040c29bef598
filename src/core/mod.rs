//! Core-Domänentypen: Missions-Aktionen und Wegpunkte.

pub mod action;
pub mod waypoint;

pub use action::{MissionAction, PATH_ACTIONS};
pub use waypoint::{PathWaypoint, Waypoint};
