//! Reine Geometrie-Funktionen für kubische Hermite-Segmente.
//!
//! Layer-neutral: wird vom Pfadgenerator importiert und kann von anderen
//! Overlay-Modulen mitbenutzt werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::DVec2;

/// Berechnet einen Punkt auf einem kubischen Hermite-Segment (t ∈ [0, 1]).
///
/// p0/p1: Start- und Endpunkt, m0/m1: Tangenten an Start und Ende.
///
/// `H(t) = (2t³−3t²+1)·p0 + (t³−2t²+t)·m0 + (−2t³+3t²)·p1 + (t³−t²)·m1`
pub fn hermite_point(p0: DVec2, m0: DVec2, p1: DVec2, m1: DVec2, t: f64) -> DVec2 {
    debug_assert!((0.0..=1.0).contains(&t), "t außerhalb [0, 1]: {t}");
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * p0
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * p1
        + (t3 - t2) * m1
}

/// Begrenzt die Tangenten, damit das Segment nicht über das Ziel hinausschießt.
///
/// Bei kurzen Segmenten mit langen Tangenten würde die Kurve weit ausbeulen:
/// wenn `|m0 + m1| > 4·|p1 − p0|`, werden beide Tangenten mit dem Verhältnis
/// skaliert. Sonst bleiben sie unverändert.
pub fn clamp_tangents(m0: DVec2, m1: DVec2, p0: DVec2, p1: DVec2) -> (DVec2, DVec2) {
    let vel_len = (m0 + m1).length();
    let pos_len = 4.0 * (p1 - p0).length();
    if vel_len > pos_len {
        let scale = pos_len / vel_len;
        (m0 * scale, m1 * scale)
    } else {
        (m0, m1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hermite_trifft_endpunkte() {
        let p0 = DVec2::new(10.0, -4.0);
        let p1 = DVec2::new(-2.0, 7.5);
        let m0 = DVec2::new(3.0, 0.0);
        let m1 = DVec2::new(0.0, -8.0);

        let start = hermite_point(p0, m0, p1, m1, 0.0);
        let end = hermite_point(p0, m0, p1, m1, 1.0);

        assert_relative_eq!(start.x, p0.x);
        assert_relative_eq!(start.y, p0.y);
        assert_relative_eq!(end.x, p1.x);
        assert_relative_eq!(end.y, p1.y);
    }

    #[test]
    fn test_hermite_mit_sehnen_tangenten_ist_gerade() {
        // m0 = m1 = p1 − p0 degeneriert zur Geraden p0 + t·(p1 − p0)
        let p0 = DVec2::new(1.0, 2.0);
        let p1 = DVec2::new(5.0, 10.0);
        let chord = p1 - p0;

        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let point = hermite_point(p0, chord, p1, chord, t);
            let expected = p0 + t * chord;
            assert!(
                (point - expected).length() < 1e-12,
                "Abweichung bei t={t}: {point:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn test_clamp_laesst_kurze_tangenten_unveraendert() {
        let p0 = DVec2::ZERO;
        let p1 = DVec2::new(10.0, 0.0);
        let m0 = DVec2::new(1.0, 0.0);
        let m1 = DVec2::new(2.0, 0.0);

        let (c0, c1) = clamp_tangents(m0, m1, p0, p1);
        assert_eq!(c0, m0);
        assert_eq!(c1, m1);
    }

    #[test]
    fn test_clamp_skaliert_beide_tangenten() {
        let p0 = DVec2::ZERO;
        let p1 = DVec2::new(1.0, 0.0);
        let m0 = DVec2::new(30.0, 0.0);
        let m1 = DVec2::new(10.0, 0.0);

        let (c0, c1) = clamp_tangents(m0, m1, p0, p1);
        // |m0 + m1| = 40 > 4·|p1 − p0| = 4 → Faktor 0.1
        assert_relative_eq!((c0 + c1).length(), 4.0 * (p1 - p0).length());
        assert_relative_eq!(c0.x, 3.0);
        assert_relative_eq!(c1.x, 1.0);
        // Richtungen bleiben erhalten
        assert_relative_eq!(c0.y, 0.0);
        assert_relative_eq!(c1.y, 0.0);
    }

    #[test]
    fn test_clamp_nullt_tangenten_bei_degeneriertem_segment() {
        // p0 == p1: jede Tangente würde überschießen → Skalierung auf 0
        let p = DVec2::new(3.0, 3.0);
        let (c0, c1) = clamp_tangents(DVec2::new(5.0, 0.0), DVec2::new(0.0, 5.0), p, p);
        assert_eq!(c0, DVec2::ZERO);
        assert_eq!(c1, DVec2::ZERO);
    }
}
