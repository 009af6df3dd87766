//! Geografische Grundtypen: Punkt, Haversine-Distanz, Bounding-Box.

use serde::{Deserialize, Serialize};

/// Erdradius in Metern (mittlerer Radius, Haversine).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geografischer Punkt in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück, wenn der Punkt endlich ist und im gültigen Wertebereich liegt.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Großkreis-Distanz zu `other` in Metern.
    pub fn distance_to(&self, other: GeoPoint) -> f64 {
        distance_m(*self, other)
    }
}

/// Großkreis-Distanz zwischen zwei Punkten in Metern (Haversine-Formel).
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let sin_dlat = (d_lat / 2.0).sin();
    let sin_dlng = (d_lng / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Achsenparallele Bounding-Box in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke (minimale lat/lng)
    pub south_west: GeoPoint,
    /// Nordost-Ecke (maximale lat/lng)
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Berechnet die Bounding-Box einer Punktfolge. `None` bei leerer Eingabe.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for p in iter {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}
