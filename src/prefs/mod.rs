//! Persistente Karten-Einstellungen.
//!
//! `MapPrefs` ist die serialisierte Form (TOML-Datei neben der Binary),
//! `PreferencesHelper` die Zugriffs-Schicht, die der Evaluator als
//! Kollaborateur konsumiert. Restore-Methoden liefern nie einen Fehler:
//! fehlende Werte kommen als ungültige Sentinels zurück.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{AdministrativeZone, BoundingBox, CameraPosition};

/// Persistierter Einstellungs-Zustand der Kartenansicht.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapPrefs {
    /// Ob die zuletzt gewählte Zone zeichenbar ist (None = nie gespeichert)
    #[serde(default)]
    pub zone_is_drawable: Option<bool>,
    /// Name der zuletzt gewählten Zone
    #[serde(default)]
    pub last_zone_name: Option<String>,
    /// Zuletzt bekannte Bounding-Box (Null-Box = nie gespeichert)
    #[serde(default)]
    pub last_bounding_box: BoundingBox,
    /// Zuletzt bekannte Kamera-Position (Null-Position = nie gespeichert)
    #[serde(default)]
    pub last_camera_position: CameraPosition,
}

/// Zugriffs-Schicht über den persistierten Einstellungen.
#[derive(Debug, Clone, Default)]
pub struct PreferencesHelper {
    prefs: MapPrefs,
}

impl PreferencesHelper {
    /// Erstellt einen Helper mit leeren Einstellungen (erster Start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Helper über einem vorhandenen Einstellungs-Zustand.
    pub fn from_prefs(prefs: MapPrefs) -> Self {
        Self { prefs }
    }

    /// Read-only-Sicht auf den aktuellen Zustand.
    pub fn prefs(&self) -> &MapPrefs {
        &self.prefs
    }

    /// Ob überhaupt ein Zeichenbar-Flag gespeichert ist.
    pub fn stores_zone_is_drawable(&self) -> bool {
        self.prefs.zone_is_drawable.is_some()
    }

    /// Gespeicherter Flag-Wert; `false` falls nie gespeichert.
    pub fn restore_zone_is_drawable(&self) -> bool {
        self.prefs.zone_is_drawable.unwrap_or(false)
    }

    /// Setzt das Zeichenbar-Flag. Gehört dem Host: wird beim Laden der
    /// Zonengeometrie geschrieben, nicht vom Evaluator.
    pub fn store_zone_is_drawable(&mut self, drawable: bool) {
        self.prefs.zone_is_drawable = Some(drawable);
    }

    /// Zuletzt bekannte Bounding-Box (möglicherweise ungültig).
    pub fn restore_last_bounding_box(&self) -> BoundingBox {
        self.prefs.last_bounding_box
    }

    /// Speichert die zuletzt bekannte Bounding-Box.
    pub fn store_last_bounding_box(&mut self, bounding_box: BoundingBox) {
        self.prefs.last_bounding_box = bounding_box;
    }

    /// Zuletzt bekannte Kamera-Position (möglicherweise ungültig).
    pub fn restore_camera_position(&self) -> CameraPosition {
        self.prefs.last_camera_position
    }

    /// Speichert die zuletzt bekannte Kamera-Position.
    pub fn store_camera_position(&mut self, position: CameraPosition) {
        self.prefs.last_camera_position = position;
    }

    /// Speichert Name und Bounding-Box einer Zone als "zuletzt gewählt".
    /// Das Zeichenbar-Flag bleibt unberührt.
    pub fn store_administrative_zone(&mut self, zone: &AdministrativeZone) {
        self.prefs.last_zone_name = Some(zone.name.clone());
        self.prefs.last_bounding_box = zone.bounding_box;
    }

    /// Lädt Einstellungen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(prefs) => {
                    log::info!("Einstellungen geladen aus: {}", path.display());
                    Self { prefs }
                }
                Err(e) => {
                    log::warn!("Einstellungs-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Einstellungs-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Einstellungen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(&self.prefs)?;
        std::fs::write(path, content)?;
        log::info!("Einstellungen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Einstellungs-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("umweltzone-map"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("umweltzone_map.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn test_fresh_prefs_store_nothing() {
        let helper = PreferencesHelper::new();
        assert!(!helper.stores_zone_is_drawable());
        assert!(!helper.restore_zone_is_drawable());
        assert!(!helper.restore_last_bounding_box().is_valid());
        assert!(!helper.restore_camera_position().is_valid());
    }

    #[test]
    fn test_store_zone_keeps_drawable_flag_untouched() {
        let mut helper = PreferencesHelper::new();
        helper.store_administrative_zone(&AdministrativeZone::default_zone());

        assert_eq!(helper.prefs().last_zone_name.as_deref(), Some("berlin"));
        assert!(helper.restore_last_bounding_box().is_valid());
        assert!(!helper.stores_zone_is_drawable());
    }

    #[test]
    fn test_drawable_flag_round_trip() {
        let mut helper = PreferencesHelper::new();
        helper.store_zone_is_drawable(false);
        assert!(helper.stores_zone_is_drawable());
        assert!(!helper.restore_zone_is_drawable());

        helper.store_zone_is_drawable(true);
        assert!(helper.restore_zone_is_drawable());
    }

    #[test]
    fn test_toml_file_round_trip() {
        let mut helper = PreferencesHelper::new();
        helper.store_zone_is_drawable(true);
        helper.store_administrative_zone(&AdministrativeZone::default_zone());
        helper.store_camera_position(CameraPosition::at(GeoPoint::new(52.52, 13.40), 11.0));

        let path = std::env::temp_dir().join("umweltzone_map_prefs_roundtrip.toml");
        helper.save_to_file(&path).expect("Speichern sollte funktionieren");

        let restored = PreferencesHelper::load_from_file(&path);
        assert!(restored.stores_zone_is_drawable());
        assert!(restored.restore_zone_is_drawable());
        assert_eq!(restored.prefs().last_zone_name.as_deref(), Some("berlin"));
        assert_eq!(
            restored.restore_last_bounding_box(),
            helper.restore_last_bounding_box()
        );
        assert_eq!(
            restored.restore_camera_position(),
            helper.restore_camera_position()
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_broken_toml_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("umweltzone_map_prefs_broken.toml");
        std::fs::write(&path, "zone_is_drawable = \"kaputt").expect("Schreiben sollte klappen");

        let restored = PreferencesHelper::load_from_file(&path);
        assert!(!restored.stores_zone_is_drawable());

        let _ = std::fs::remove_file(&path);
    }
}
