//! Flugpfad-Vorschau — Zeichenbefehle und der Pfadgenerator.
//!
//! Aufgeteilt in:
//! - `mod`     — `FlightPath` und `PathCommand`, das Ausgabemodell
//! - `builder` — `build_flight_path`, die Kurvenkonstruktion

mod builder;

pub use builder::build_flight_path;


use glam::DVec2;

/// Ein einzelner Zeichenbefehl des Vorschau-Pfads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Stift anheben und an die Position setzen
    MoveTo(DVec2),
    /// Linie von der aktuellen Position bis zur Zielposition
    LineTo(DVec2),
}

/// Der fertige Vorschau-Pfad: eine geordnete Folge von Zeichenbefehlen.
///
/// Vollständig abgeleitet — bei jeder Änderung von Mission oder Kartenansicht
/// wird der Pfad komplett neu berechnet, nie inkrementell verändert. Die
/// Befehle besuchen die Wegpunkte in Missionsreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightPath {
    commands: Vec<PathCommand>,
}

impl FlightPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Zeichenbefehle in Zeichenreihenfolge.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// true wenn der Pfad keine Befehle enthält.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Anzahl der gezeichneten Liniensegmente (`LineTo`-Befehle).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::LineTo(_)))
            .count()
    }

    /// Stift anheben und an `point` setzen.
    pub fn move_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Linie bis `point` zeichnen.
    pub fn line_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Alle Befehls-Positionen in Zeichenreihenfolge.
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.commands.iter().map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => *point,
        })
    }

    /// Summierte Länge aller gezeichneten Segmente (Bildschirm-Einheiten).
    ///
    /// `MoveTo`-Sprünge tragen nicht zur Länge bei.
    pub fn length(&self) -> f64 {
        let mut total = 0.0;
        let mut cursor: Option<DVec2> = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => cursor = Some(point),
                PathCommand::LineTo(point) => {
                    if let Some(from) = cursor {
                        total += from.distance(point);
                    }
                    cursor = Some(point);
                }
            }
        }
        total
    }

    /// Umschließendes Rechteck aller Pfad-Punkte als (min, max).
    ///
    /// `None` bei leerem Pfad. Für Zoom-to-Fit der Kartenansicht.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut points = self.points();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for point in points {
            min = min.min(point);
            max = max.max(point);
        }
        Some((min, max))
    }
}
