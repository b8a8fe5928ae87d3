//! Minimaler Host für die Karten-Startlogik.
//!
//! Lädt die persistierten Einstellungen, wertet den Startzustand einmal aus
//! und protokolliert die resultierenden UI-Effekte. Dient als Referenz dafür,
//! wie ein echter Host (Kartenansicht) die Kollaborateure verdrahtet.

use umweltzone_map::{
    AdministrativeZone, BoundingBox, CameraPosition, CenterZoneRequest, MapReadyEvaluator,
    MapReadyListener, PreferencesHelper, ZoneProvider,
};

/// Listener, der jeden UI-Effekt nur protokolliert.
struct LoggingListener;

impl MapReadyListener for LoggingListener {
    fn on_draw_polygon_overlay(&mut self) {
        log::info!("UI-Effekt: Polygon-Overlay zeichnen");
    }

    fn on_show_zone_not_drawable_dialog(&mut self) {
        log::info!("UI-Effekt: Dialog 'Zone nicht zeichenbar' zeigen");
    }

    fn on_zoom_to_bounds(&mut self, bounds: BoundingBox) {
        let rb = bounds.to_render_bounds();
        log::info!("UI-Effekt: Zoom auf Bounds {:?} -> {:?}", rb.min, rb.max);
    }

    fn on_zoom_to_location(&mut self, position: CameraPosition) {
        log::info!(
            "UI-Effekt: Zoom auf Position ({}, {}) @ Zoom {}",
            position.target.latitude,
            position.target.longitude,
            position.zoom
        );
    }

    fn on_store_last_map_state(&mut self) {
        log::info!("UI-Effekt: aktuellen Kartenzustand speichern");
    }
}

/// Provider für die gebündelte Standard-Zone.
struct BundledZoneProvider;

impl ZoneProvider for BundledZoneProvider {
    fn default_zone(&self) -> AdministrativeZone {
        AdministrativeZone::default_zone()
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("umweltzone-map v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = PreferencesHelper::config_path();
    let mut prefs = PreferencesHelper::load_from_file(&config_path);
    let mut center_request = CenterZoneRequest::new();
    let mut listener = LoggingListener;

    MapReadyEvaluator::new(
        &mut prefs,
        &mut center_request,
        &BundledZoneProvider,
        &mut listener,
    )
    .evaluate();

    prefs.save_to_file(&config_path)?;
    Ok(())
}
