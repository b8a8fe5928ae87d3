//! Textbausteine für die Zonen-Info-Anzeige.
//!
//! Reine String-Bausteine ohne UI-Abhängigkeit. Fehlende Daten ergeben den
//! leeren String ("nichts anzuzeigen"), passend zum stillen Überspringen
//! im Karten-Evaluator.

use chrono::{Datelike, NaiveDate};

use crate::core::AdministrativeZone;

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Formatiert ein Datum als "3. Januar 2020".
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}. {} {}", date.day(), month, date.year())
}

/// Aufzählung der Städte innerhalb der Zone; leer bei leerer Liste.
pub fn list_of_cities_text(zone: &AdministrativeZone) -> String {
    match zone.list_of_cities.as_slice() {
        [] => String::new(),
        [only] => format!("Städte in dieser Zone: {}.", only),
        [head @ .., last] => format!(
            "Städte in dieser Zone: {} und {}.",
            head.join(", "),
            last
        ),
    }
}

/// Satz zur aktuell geltenden Plaketten-Stufe.
///
/// "Seit" für vergangene Stichtage, "ab" für zukünftige (relativ zu `today`).
/// Zonen ohne Plaketten-Regelung liefern den festen Hinweis-Text.
pub fn zone_number_since_text(zone: &AdministrativeZone, today: NaiveDate) -> String {
    let Some(color) = zone.zone_number.color_fragment() else {
        // Statische Zonen-Information
        return "Keine Plakette erforderlich.".to_string();
    };
    match zone.zone_number_since {
        Some(since) if today < since => {
            format!("Ab dem {} gilt die {} Plakette.", format_date(since), color)
        }
        Some(since) => {
            format!("Seit dem {} gilt die {} Plakette.", format_date(since), color)
        }
        None => format!("Es gilt die {} Plakette.", color),
    }
}

/// Satz zu einer angekündigten Verschärfung; leer, wenn keine ansteht.
pub fn next_zone_number_as_of_text(zone: &AdministrativeZone) -> String {
    let Some(as_of) = zone.next_zone_number_as_of else {
        return String::new();
    };
    let next = zone.zone_number.next();
    let Some(color) = next.color_fragment() else {
        log::error!(
            "Nächste Plaketten-Stufe {:?} hat keinen Farb-Textbaustein.",
            next
        );
        return String::new();
    };
    format!("Ab dem {} gilt die {} Plakette.", format_date(as_of), color)
}

/// Satz zur Übergangsregelung für im Ausland zugelassene Fahrzeuge;
/// leer, wenn keine Übergangsfrist gesetzt ist.
pub fn abroad_licensed_vehicle_zone_number_text(zone: &AdministrativeZone) -> String {
    let Some(until) = zone.abroad_licensed_vehicle_zone_number_until else {
        return String::new();
    };
    let number = zone.abroad_licensed_vehicle_zone_number;
    let Some(color) = number.color_fragment() else {
        log::error!(
            "Plaketten-Stufe {:?} für im Ausland zugelassene Fahrzeuge hat keinen Farb-Textbaustein.",
            number
        );
        return String::new();
    };
    format!(
        "Für im Ausland zugelassene Fahrzeuge gilt bis zum {} die {} Plakette.",
        format_date(until),
        color
    )
}

/// Hinweis auf den Stand der Zonengeometrie; leer ohne Datum.
pub fn geometry_updated_at_text(geometry_updated_at: Option<NaiveDate>) -> String {
    match geometry_updated_at {
        Some(date) => format!("Stand der Zonengeometrie: {}.", format_date(date)),
        None => String::new(),
    }
}

/// Hinweis auf die Quelle der Zonengeometrie; leer ohne Quelle.
pub fn geometry_source_text(geometry_source: Option<&str>) -> String {
    match geometry_source {
        Some(source) if !source.is_empty() => {
            format!("Quelle der Zonengeometrie: {}.", source)
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZoneNumber;

    fn zone() -> AdministrativeZone {
        AdministrativeZone::default_zone()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("gültiges Testdatum")
    }

    #[test]
    fn test_format_date_german() {
        assert_eq!(format_date(date(2020, 1, 3)), "3. Januar 2020");
        assert_eq!(format_date(date(2014, 12, 31)), "31. Dezember 2014");
    }

    #[test]
    fn test_list_of_cities_empty_single_many() {
        let mut z = zone();
        z.list_of_cities = vec![];
        assert_eq!(list_of_cities_text(&z), "");

        z.list_of_cities = vec!["Berlin".into()];
        assert_eq!(list_of_cities_text(&z), "Städte in dieser Zone: Berlin.");

        z.list_of_cities = vec!["Leipzig".into(), "Halle".into(), "Merseburg".into()];
        assert_eq!(
            list_of_cities_text(&z),
            "Städte in dieser Zone: Leipzig, Halle und Merseburg."
        );
    }

    #[test]
    fn test_zone_number_since_past_and_future() {
        let mut z = zone();
        z.zone_number = ZoneNumber::Green;
        z.zone_number_since = Some(date(2010, 1, 1));

        assert_eq!(
            zone_number_since_text(&z, date(2020, 6, 1)),
            "Seit dem 1. Januar 2010 gilt die grüne Plakette."
        );
        assert_eq!(
            zone_number_since_text(&z, date(2009, 6, 1)),
            "Ab dem 1. Januar 2010 gilt die grüne Plakette."
        );
    }

    #[test]
    fn test_zone_number_since_static_zone() {
        let mut z = zone();
        z.zone_number = ZoneNumber::None;
        assert_eq!(
            zone_number_since_text(&z, date(2020, 6, 1)),
            "Keine Plakette erforderlich."
        );
    }

    #[test]
    fn test_next_zone_number_text() {
        let mut z = zone();
        z.zone_number = ZoneNumber::Yellow;
        z.next_zone_number_as_of = Some(date(2021, 7, 1));
        assert_eq!(
            next_zone_number_as_of_text(&z),
            "Ab dem 1. Juli 2021 gilt die grüne Plakette."
        );
    }

    #[test]
    fn test_next_zone_number_without_successor_is_empty() {
        let mut z = zone();
        z.zone_number = ZoneNumber::Green;
        z.next_zone_number_as_of = Some(date(2021, 7, 1));
        // Nach Grün gibt es keine Stufe mehr: leerer String, Fehler-Log
        assert_eq!(next_zone_number_as_of_text(&z), "");
    }

    #[test]
    fn test_abroad_licensed_vehicle_text() {
        let mut z = zone();
        z.abroad_licensed_vehicle_zone_number = ZoneNumber::Yellow;
        z.abroad_licensed_vehicle_zone_number_until = Some(date(2015, 12, 31));
        assert_eq!(
            abroad_licensed_vehicle_zone_number_text(&z),
            "Für im Ausland zugelassene Fahrzeuge gilt bis zum 31. Dezember 2015 die gelbe Plakette."
        );
    }

    #[test]
    fn test_abroad_licensed_vehicle_text_without_deadline_is_empty() {
        let mut z = zone();
        z.abroad_licensed_vehicle_zone_number = ZoneNumber::Yellow;
        z.abroad_licensed_vehicle_zone_number_until = None;
        assert_eq!(abroad_licensed_vehicle_zone_number_text(&z), "");
    }

    #[test]
    fn test_abroad_licensed_vehicle_text_without_color_is_empty() {
        let mut z = zone();
        z.abroad_licensed_vehicle_zone_number = ZoneNumber::None;
        z.abroad_licensed_vehicle_zone_number_until = Some(date(2015, 12, 31));
        // Keine Stufe gesetzt: leerer String, Fehler-Log
        assert_eq!(abroad_licensed_vehicle_zone_number_text(&z), "");
    }

    #[test]
    fn test_geometry_texts() {
        assert_eq!(geometry_updated_at_text(None), "");
        assert_eq!(
            geometry_updated_at_text(Some(date(2019, 3, 12))),
            "Stand der Zonengeometrie: 12. März 2019."
        );
        assert_eq!(geometry_source_text(None), "");
        assert_eq!(geometry_source_text(Some("")), "");
        assert_eq!(
            geometry_source_text(Some("Stadt Berlin")),
            "Quelle der Zonengeometrie: Stadt Berlin."
        );
    }
}
