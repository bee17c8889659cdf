use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A position on the map given in degrees.
///
/// Two coordinates are equal if and only if both latitude
/// and longitude are equal. There is no tolerance: positions
/// that differ in the last bit of a single component are
/// treated as distinct places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// Hashing must agree with `PartialEq`, i.e. -0.0 and 0.0 hash identically.
fn hash_key(deg: f64) -> u64 {
    if deg == 0.0 {
        0.0f64.to_bits()
    } else {
        deg.to_bits()
    }
}

// NaN coordinates are never stored, so equality is reflexive in practice.
impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(self.lat).hash(state);
        hash_key(self.lng).hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
