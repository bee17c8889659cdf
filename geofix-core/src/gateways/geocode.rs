use crate::entities::Coordinate;
use serde_json::{Map, Value};
use thiserror::Error;

/// An address as reported by a reverse geocoding provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderAddress {
    pub display_name: String,
    /// Structured address fields, e.g. `road` or `postcode`.
    /// Values are usually strings but providers are free to
    /// return any JSON value.
    pub fields: Map<String, Value>,
    pub entity_id: i64,
    pub entity_type: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("No address found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub trait ReverseGeocodingGateway {
    fn reverse_geocode(&self, pos: Coordinate) -> Result<ProviderAddress, Error>;
}

impl<T> ReverseGeocodingGateway for &T
where
    T: ReverseGeocodingGateway + ?Sized,
{
    fn reverse_geocode(&self, pos: Coordinate) -> Result<ProviderAddress, Error> {
        (**self).reverse_geocode(pos)
    }
}

impl<T> ReverseGeocodingGateway for Box<T>
where
    T: ReverseGeocodingGateway + ?Sized,
{
    fn reverse_geocode(&self, pos: Coordinate) -> Result<ProviderAddress, Error> {
        (**self).reverse_geocode(pos)
    }
}
