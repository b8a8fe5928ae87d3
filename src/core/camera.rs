//! Kamera-Position der Kartenansicht.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Viewport-Beschreibung der Karte: Ziel, Zoom, Neigung, Ausrichtung.
///
/// `Default` ist der ungültige Null-Sentinel, den die Einstellungen
/// zurückgeben solange noch keine Position gespeichert wurde.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPosition {
    /// Kartenzentrum
    pub target: GeoPoint,
    /// Zoom-Stufe (Web-Mercator-Kachelstufen)
    pub zoom: f32,
    /// Neigung in Grad
    pub tilt: f32,
    /// Ausrichtung in Grad (0 = Norden)
    pub bearing: f32,
}

impl CameraPosition {
    /// Minimale Zoom-Stufe.
    pub const ZOOM_MIN: f32 = 2.0;
    /// Maximale Zoom-Stufe.
    pub const ZOOM_MAX: f32 = 21.0;
    /// Standard-Zoom beim Sprung auf eine Zone.
    pub const ZOOM_DEFAULT: f32 = 10.0;

    /// Erstellt eine Position ohne Neigung und Ausrichtung.
    pub fn at(target: GeoPoint, zoom: f32) -> Self {
        Self {
            target,
            zoom,
            tilt: 0.0,
            bearing: 0.0,
        }
    }

    /// Gültig = plausibles Ziel (kein Null-Sentinel), Zoom im erlaubten
    /// Bereich, endliche Neigung/Ausrichtung.
    pub fn is_valid(&self) -> bool {
        self.target.is_valid()
            && !self.target.is_zero()
            && (Self::ZOOM_MIN..=Self::ZOOM_MAX).contains(&self.zoom)
            && self.tilt.is_finite()
            && self.bearing.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position_is_invalid() {
        assert!(!CameraPosition::default().is_valid());
    }

    #[test]
    fn test_plausible_position_is_valid() {
        let pos = CameraPosition::at(GeoPoint::new(52.52, 13.40), 11.0);
        assert!(pos.is_valid());
    }

    #[test]
    fn test_zoom_outside_range_is_invalid() {
        let target = GeoPoint::new(52.52, 13.40);
        assert!(!CameraPosition::at(target, 0.0).is_valid());
        assert!(!CameraPosition::at(target, 25.0).is_valid());
    }

    #[test]
    fn test_zero_target_is_invalid() {
        // (0, 0) liegt im Golf von Guinea, hier aber: "nichts gespeichert"
        assert!(!CameraPosition::at(GeoPoint::new(0.0, 0.0), 11.0).is_valid());
    }
}
