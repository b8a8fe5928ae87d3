//! Textbausteine für die Zonen-Info-Anzeige.

pub mod zone_info;

pub use zone_info::{
    abroad_licensed_vehicle_zone_number_text, format_date, geometry_source_text,
    geometry_updated_at_text, list_of_cities_text, next_zone_number_as_of_text,
    zone_number_since_text,
};
