//! Real Prague locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real places a trip
//! planner would schedule, at walkable city distances plus two genuine
//! day-trip destinations outside the city.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Central Prague sights (walkable cluster)
// ============================================================================

pub const SIGHTS: &[Location] = &[
    Location::new("Prague Castle", 50.0909, 14.4005),
    Location::new("Charles Bridge", 50.0865, 14.4114),
    Location::new("Old Town Square", 50.0875, 14.4213),
    Location::new("Wenceslas Square", 50.0811, 14.4280),
    Location::new("National Museum", 50.0789, 14.4307),
    Location::new("Dancing House", 50.0755, 14.4141),
    Location::new("Vysehrad Fortress", 50.0645, 14.4180),
    Location::new("Petrin Tower", 50.0833, 14.3950),
    Location::new("Letna Park", 50.0955, 14.4165),
];

// ============================================================================
// Hotels (multi-day stay anchors)
// ============================================================================

pub const HOTELS: &[Location] = &[
    Location::new("Hotel U Prince", 50.0870, 14.4205),
    Location::new("Golden Well Hotel", 50.0885, 14.4040),
];

// ============================================================================
// Day-trip destinations outside the city
// ============================================================================

pub const DAY_TRIPS: &[Location] = &[
    Location::new("Kutna Hora", 49.9481, 15.2684),
    Location::new("Karlstejn Castle", 49.9394, 14.1882),
    Location::new("Cesky Krumlov", 48.8127, 14.3175),
];
