//! Geografische Grundtypen: Punkte und Bounding-Boxen (WGS84).
//!
//! Die `Default`-Werte sind bewusst die Null-Sentinels: eine nie gespeicherte
//! Bounding-Box kommt als Null-Box aus den Einstellungen zurück und fällt
//! durch `is_valid()` — genau wie eine fehlerhafte.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geografische Koordinate in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad [-90, 90]
    pub latitude: f64,
    /// Längengrad [-180, 180]
    pub longitude: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breiten- und Längengrad.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Plausibilitätsprüfung: endliche Werte innerhalb der Gradbereiche.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Null-Sentinel (0, 0) — "nichts gespeichert".
    pub fn is_zero(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// Rechteckiger geografischer Ausschnitt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Südwest-Ecke
    pub south_west: GeoPoint,
    /// Nordost-Ecke
    pub north_east: GeoPoint,
}

impl BoundingBox {
    /// Erstellt eine Box aus Südwest- und Nordost-Ecke.
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Gültig = beide Ecken plausibel, nicht entartet, nicht der Null-Sentinel.
    pub fn is_valid(&self) -> bool {
        self.south_west.is_valid()
            && self.north_east.is_valid()
            && !(self.south_west.is_zero() && self.north_east.is_zero())
            && self.south_west.latitude < self.north_east.latitude
            && self.south_west.longitude != self.north_east.longitude
    }

    /// Geometrischer Mittelpunkt der Box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    /// Konvertiert in Renderer-Bounds (x = Längengrad, y = Breitengrad).
    pub fn to_render_bounds(&self) -> RenderBounds {
        RenderBounds {
            min: DVec2::new(self.south_west.longitude, self.south_west.latitude),
            max: DVec2::new(self.north_east.longitude, self.north_east.latitude),
        }
    }
}

/// Achsen-parallele Bounds im Koordinatensystem des Karten-Renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderBounds {
    /// Minimale Ecke (West/Süd)
    pub min: DVec2,
    /// Maximale Ecke (Ost/Nord)
    pub max: DVec2,
}
