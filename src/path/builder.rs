//! Pfadgenerator: baut aus einer Missionsliste die Zeichenbefehle der Vorschau.

use glam::DVec2;

use crate::core::{MissionAction, PathWaypoint};
use crate::shared::hermite::{clamp_tangents, hermite_point};
use crate::shared::PreviewOptions;

use super::FlightPath;

/// Tangenten-Anteil der Sehne p1 − p0 an Halte- und Randpunkten.
const STOP_TANGENT_SCALE: f64 = 0.1;

/// Baut den Vorschau-Pfad für eine Missionsliste.
///
/// `project` bildet geographische Koordinaten (Grad) auf Bildschirm-Punkte ab,
/// muss für die Dauer des Aufrufs deterministisch sein und wird genau einmal
/// pro Wegpunkt aufgerufen.
///
/// Der Pfad beginnt am Anker: dem ersten Wegpunkt, dessen Aktion im Filter
/// liegt und der nicht auf dem Ursprungs-Platzhalter (0, 0) steht. Ohne Anker
/// bleibt der Pfad leer. Ab dem Anker entsteht pro gefiltertem Wegpunkt ein
/// gerades Segment, pro Spline-Wegpunkt ein abgetastetes Hermite-Segment;
/// alle übrigen Aktionen werden übersprungen, ohne den Stift zu bewegen.
pub fn build_flight_path<W: PathWaypoint>(
    waypoints: &[W],
    project: impl Fn(f64, f64) -> DVec2,
    options: &PreviewOptions,
) -> FlightPath {
    let mut path = FlightPath::new();
    if waypoints.len() < 2 {
        return path;
    }

    let drawn = |wp: &W| wp.action().is_path_action(options.include_takeoff);
    let Some(anchor) = waypoints.iter().position(|wp| drawn(wp) && !wp.is_origin()) else {
        log::debug!("Kein Anker-Wegpunkt im Filter, Vorschau bleibt leer");
        return path;
    };

    // Projektion genau einmal pro Wegpunkt
    let screen: Vec<DVec2> = waypoints
        .iter()
        .map(|wp| project(wp.latitude(), wp.longitude()))
        .collect();

    path.move_to(screen[anchor]);
    let resume = anchor + 1;

    // Ziel-Tangente des zuletzt gebauten Spline-Segments; Quelle der
    // Start-Tangente des Folgesegments (Tangenten-Stetigkeit).
    let mut carried_tangent = DVec2::ZERO;

    for index in resume..waypoints.len() {
        if drawn(&waypoints[index]) {
            path.line_to(screen[index]);
            continue;
        }
        if waypoints[index].action() != MissionAction::SplineWaypoint {
            continue;
        }

        let p0 = screen[index - 1];
        let p1 = screen[index];

        let m0 = origin_tangent(waypoints, &screen, index, resume, carried_tangent);
        let m1 = destination_tangent(waypoints, &screen, index);
        let (m0, m1) = clamp_tangents(m0, m1, p0, p1);
        carried_tangent = m1;

        let steps = options.spline_sample_steps.max(1);
        for k in 0..=steps {
            let t = k as f64 / steps as f64;
            path.line_to(hermite_point(p0, m0, p1, m1, t));
        }
    }

    path
}

/// Start-Tangente m0 eines Spline-Segments.
///
/// Stehender Start (kurze Tangente Richtung Ziel) wenn das Segment direkt auf
/// den Anker folgt, der Vorgänger kein Durchflug-Wegpunkt ist oder der
/// Vorgänger eine Haltezeit trägt. Nach einem normalen Wegpunkt zieht die
/// Anflugrichtung seines geraden Segments (p0 − p_prev2); nach einem
/// Spline-Wegpunkt wird dessen Ziel-Tangente übernommen.
fn origin_tangent<W: PathWaypoint>(
    waypoints: &[W],
    screen: &[DVec2],
    index: usize,
    resume: usize,
    carried: DVec2,
) -> DVec2 {
    let p0 = screen[index - 1];
    let p1 = screen[index];
    let prev = &waypoints[index - 1];

    if index == resume || !prev.action().is_fly_through() || prev.hold_time() != 0.0 {
        return STOP_TANGENT_SCALE * (p1 - p0);
    }
    if prev.action() == MissionAction::Waypoint {
        debug_assert!(index >= 2, "Anflugrichtung braucht zwei Vorgänger");
        return p0 - screen[index - 2];
    }
    // Vorgänger ist selbst ein Spline-Wegpunkt
    carried
}

/// Ziel-Tangente m1 eines Spline-Segments.
///
/// Kurze Tangente (Abbremsen) am Missionsende und bei eigener Haltezeit;
/// sonst richtet der Nachfolger sie aus: Sehne p2 − p1 vor einem normalen
/// Wegpunkt, p2 − p0 vor einem weiteren Spline-Wegpunkt.
fn destination_tangent<W: PathWaypoint>(
    waypoints: &[W],
    screen: &[DVec2],
    index: usize,
) -> DVec2 {
    let p0 = screen[index - 1];
    let p1 = screen[index];

    if index + 1 == waypoints.len() || waypoints[index].hold_time() != 0.0 {
        return STOP_TANGENT_SCALE * (p1 - p0);
    }
    let p2 = screen[index + 1];
    match waypoints[index + 1].action() {
        MissionAction::Waypoint => p2 - p1,
        MissionAction::SplineWaypoint => p2 - p0,
        _ => STOP_TANGENT_SCALE * (p1 - p0),
    }
}
