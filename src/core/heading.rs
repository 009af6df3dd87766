//! Kompass-Messwerte verschiedener Sensorquellen und deren Normalisierung.

use serde::{Deserialize, Serialize};

/// Roh-Messwert einer Orientierungsquelle.
///
/// Je nach Plattform liefert der Sensor direkt einen Kompass-Kurs oder nur
/// den Drehwinkel um die Hochachse, der erst umgerechnet werden muss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingReading {
    /// Absoluter Kompass-Kurs in Grad (0 = Nord, im Uhrzeigersinn)
    Compass(f64),
    /// Roher Alpha-Winkel des Geräts (gegen den Uhrzeigersinn), Kurs = 360 − Alpha
    RawAlpha(f64),
}

impl HeadingReading {
    /// Normalisierter Kurs in `[0, 360)`. `None` bei nicht-endlichem Messwert.
    pub fn normalized(&self) -> Option<f64> {
        let degrees = match *self {
            HeadingReading::Compass(value) => value,
            HeadingReading::RawAlpha(alpha) => 360.0 - alpha,
        };
        degrees.is_finite().then(|| normalize_degrees(degrees))
    }

    /// Quelle des Messwerts.
    pub fn source(&self) -> HeadingSourceKind {
        match self {
            HeadingReading::Compass(_) => HeadingSourceKind::Compass,
            HeadingReading::RawAlpha(_) => HeadingSourceKind::RawAlpha,
        }
    }
}

/// Art der Orientierungsquelle (konfigurierbar für die Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingSourceKind {
    /// Liefert direkt den Kompass-Kurs
    #[default]
    Compass,
    /// Liefert den Alpha-Winkel
    RawAlpha,
}

/// Bringt einen beliebigen Winkel in den Bereich `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid kann bei sehr kleinen negativen Werten exakt 360.0 liefern
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compass_reading_is_taken_directly() {
        let heading = HeadingReading::Compass(42.5).normalized();
        assert_relative_eq!(heading.unwrap_or(-1.0), 42.5);
    }

    #[test]
    fn test_raw_alpha_is_inverted() {
        assert_relative_eq!(
            HeadingReading::RawAlpha(90.0).normalized().unwrap_or(-1.0),
            270.0
        );
        // Alpha 0 → 360 → normalisiert 0
        assert_relative_eq!(
            HeadingReading::RawAlpha(0.0).normalized().unwrap_or(-1.0),
            0.0
        );
    }

    #[test]
    fn test_normalize_wraps_into_range() {
        assert_relative_eq!(normalize_degrees(360.0), 0.0);
        assert_relative_eq!(normalize_degrees(-10.0), 350.0);
        assert_relative_eq!(normalize_degrees(725.0), 5.0);
        let tiny = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_non_finite_reading_is_rejected() {
        assert!(HeadingReading::Compass(f64::NAN).normalized().is_none());
        assert!(HeadingReading::RawAlpha(f64::INFINITY).normalized().is_none());
    }
}
