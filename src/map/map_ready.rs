//! Auswertung des Karten-Startzustands ("map ready").
//!
//! Sobald die Karte bereit ist, entscheidet der [`MapReadyEvaluator`] aus den
//! persistierten Einstellungen und dem transienten Zentrier-Flag, welche
//! UI-Effekte der Host ausführen soll: Overlay zeichnen oder Dialog zeigen,
//! plus genau eines von drei Zoom-Zielen. Ungültige gespeicherte Werte werden
//! still übersprungen, niemals als Fehler gemeldet.

use crate::core::{AdministrativeZone, BoundingBox, CameraPosition};
use crate::prefs::PreferencesHelper;

/// Empfänger der UI-Effekte; typischerweise die Kartenansicht des Hosts.
/// Pro `evaluate()`-Aufruf feuern null bis vier Callbacks in fester Reihenfolge.
pub trait MapReadyListener {
    /// Polygon-Overlay der aktuellen Zone zeichnen.
    fn on_draw_polygon_overlay(&mut self);

    /// Hinweis-Dialog zeigen: Zone hat keine zeichenbare Geometrie.
    fn on_show_zone_not_drawable_dialog(&mut self);

    /// Auf eine Bounding-Box zoomen.
    fn on_zoom_to_bounds(&mut self, bounds: BoundingBox);

    /// Auf eine gespeicherte Kamera-Position zoomen.
    fn on_zoom_to_location(&mut self, position: CameraPosition);

    /// Host soll den jetzt aktuellen Kartenzustand persistieren.
    fn on_store_last_map_state(&mut self);
}

/// Liefert die Fallback-Zone für den ersten Anwendungsstart.
pub trait ZoneProvider {
    /// Standard-Zone (z.B. aus den gebündelten Zonendaten).
    fn default_zone(&self) -> AdministrativeZone;
}

/// Transientes One-Shot-Flag des Host-Screens: Nutzer hat gerade eine Stadt
/// aus der Liste gewählt, die Karte soll deren Zone zentrieren.
#[derive(Debug, Default)]
pub struct CenterZoneRequest {
    requested: bool,
}

impl CenterZoneRequest {
    /// Erstellt ein nicht gesetztes Flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob eine Zentrierung angefordert ist.
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Setzt oder löscht die Anforderung.
    pub fn set_requested(&mut self, requested: bool) {
        self.requested = requested;
    }
}

/// Entscheidet beim "map ready"-Ereignis über den Startzustand der Karte.
///
/// Kollaborateure werden bei der Konstruktion injiziert; `evaluate()` ist
/// synchron, kehrt ohne Rückgabewert zurück und erwartet keine nebenläufigen
/// Aufrufe (das Zentrier-Flag wird in-place mutiert).
pub struct MapReadyEvaluator<'a> {
    prefs: &'a mut PreferencesHelper,
    center_request: &'a mut CenterZoneRequest,
    zone_provider: &'a dyn ZoneProvider,
    listener: &'a mut dyn MapReadyListener,
}

impl<'a> MapReadyEvaluator<'a> {
    /// Erstellt einen Evaluator über den Kollaborateuren des Host-Screens.
    pub fn new(
        prefs: &'a mut PreferencesHelper,
        center_request: &'a mut CenterZoneRequest,
        zone_provider: &'a dyn ZoneProvider,
        listener: &'a mut dyn MapReadyListener,
    ) -> Self {
        Self {
            prefs,
            center_request,
            zone_provider,
            listener,
        }
    }

    /// Wertet den Startzustand aus und feuert die Listener-Callbacks.
    ///
    /// Ablauf: erst die Overlay/Dialog-Entscheidung, dann genau einer der
    /// drei Zoom-Zweige (Zentrier-Anforderung, gespeicherte Kamera-Position,
    /// Standard-Zone). Das Zentrier-Flag wird bei Anforderung immer
    /// verbraucht, auch wenn die gespeicherte Box ungültig war.
    pub fn evaluate(&mut self) {
        self.emit_overlay_decision();

        if self.center_request.is_requested() {
            // Stadt wurde aus der Liste gewählt
            let last_known_bounds = self.prefs.restore_last_bounding_box();
            if last_known_bounds.is_valid() {
                self.listener.on_zoom_to_bounds(last_known_bounds);
            }
            self.center_request.set_requested(false);
        } else {
            let last_known_position = self.prefs.restore_camera_position();
            if last_known_position.is_valid() {
                self.listener.on_zoom_to_location(last_known_position);
            } else {
                // Erster Start oder verlorener Zustand: Standard-Zone wählen
                let zone = self.zone_provider.default_zone();
                self.prefs.store_administrative_zone(&zone);
                self.emit_overlay_decision();
                self.listener.on_zoom_to_bounds(zone.bounding_box);
                self.listener.on_store_last_map_state();
            }
        }
    }

    /// Overlay/Dialog-Entscheidung über dem aktuell gespeicherten Flag.
    /// Läuft im Standard-Zonen-Zweig ein zweites Mal, nachdem die Zone
    /// persistiert wurde.
    fn emit_overlay_decision(&mut self) {
        if self.prefs.stores_zone_is_drawable() {
            if self.prefs.restore_zone_is_drawable() {
                self.listener.on_draw_polygon_overlay();
            } else {
                self.listener.on_show_zone_not_drawable_dialog();
            }
        }
    }
}
