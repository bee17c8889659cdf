use crate::{gateways::geocode, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reverse geocoding failed: {0}")]
    Geocoding(#[from] geocode::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
