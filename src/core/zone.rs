//! Verwaltungszonen (Umweltzonen) und ihre Plaketten-Stufen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BoundingBox, GeoPoint};

/// Plaketten-Stufe einer Umweltzone.
///
/// `None` steht für statische Zonen ohne Plaketten-Regelung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneNumber {
    /// Keine Plaketten-Regelung
    #[default]
    None,
    /// Rote Plakette (Schadstoffgruppe 2)
    Red,
    /// Gelbe Plakette (Schadstoffgruppe 3)
    Yellow,
    /// Grüne Plakette (Schadstoffgruppe 4)
    Green,
}

impl ZoneNumber {
    /// Nächste Stufe bei angekündigter Verschärfung.
    /// Nach Grün gibt es keine weitere Stufe.
    pub fn next(self) -> ZoneNumber {
        match self {
            ZoneNumber::Red => ZoneNumber::Yellow,
            ZoneNumber::Yellow => ZoneNumber::Green,
            ZoneNumber::Green | ZoneNumber::None => ZoneNumber::None,
        }
    }

    /// Farb-Textbaustein für Info-Texte; `None` hat keinen.
    pub fn color_fragment(self) -> Option<&'static str> {
        match self {
            ZoneNumber::None => None,
            ZoneNumber::Red => Some("rote"),
            ZoneNumber::Yellow => Some("gelbe"),
            ZoneNumber::Green => Some("grüne"),
        }
    }
}

/// Verwaltungszone mit Bounding-Box und Plaketten-Informationen.
/// Wird vom Evaluator nur gelesen, nie verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministrativeZone {
    /// Interner Name (stabiler Schlüssel, z.B. "berlin")
    pub name: String,
    /// Anzeigename (z.B. "Berlin")
    pub display_name: String,
    /// Städte innerhalb der Zone
    #[serde(default)]
    pub list_of_cities: Vec<String>,
    /// Geografische Ausdehnung der Zone
    pub bounding_box: BoundingBox,
    /// Aktuell geltende Plaketten-Stufe
    #[serde(default)]
    pub zone_number: ZoneNumber,
    /// Stichtag, seit/ab dem die aktuelle Stufe gilt
    #[serde(default)]
    pub zone_number_since: Option<NaiveDate>,
    /// Stichtag einer angekündigten Verschärfung
    #[serde(default)]
    pub next_zone_number_as_of: Option<NaiveDate>,
    /// Übergangsweise geltende Stufe für im Ausland zugelassene Fahrzeuge
    #[serde(default)]
    pub abroad_licensed_vehicle_zone_number: ZoneNumber,
    /// Ende der Übergangsregelung für im Ausland zugelassene Fahrzeuge
    #[serde(default)]
    pub abroad_licensed_vehicle_zone_number_until: Option<NaiveDate>,
    /// Stand der Zonengeometrie
    #[serde(default)]
    pub geometry_updated_at: Option<NaiveDate>,
    /// Quelle der Zonengeometrie
    #[serde(default)]
    pub geometry_source: Option<String>,
}

impl AdministrativeZone {
    /// Standard-Zone beim ersten Anwendungsstart: Berlin.
    pub fn default_zone() -> Self {
        Self {
            name: "berlin".to_string(),
            display_name: "Berlin".to_string(),
            list_of_cities: vec!["Berlin".to_string()],
            bounding_box: BoundingBox::new(
                GeoPoint::new(52.3382448, 13.0883450),
                GeoPoint::new(52.6755086, 13.7611609),
            ),
            zone_number: ZoneNumber::Green,
            zone_number_since: NaiveDate::from_ymd_opt(2010, 1, 1),
            next_zone_number_as_of: None,
            abroad_licensed_vehicle_zone_number: ZoneNumber::None,
            abroad_licensed_vehicle_zone_number_until: None,
            geometry_updated_at: None,
            geometry_source: None,
        }
    }
}
