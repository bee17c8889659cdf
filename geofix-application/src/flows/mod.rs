mod broken_drives;
mod ensure_drive_addresses;
mod reconcile;
mod relink_drives;

pub use self::{broken_drives::*, ensure_drive_addresses::*, reconcile::*, relink_drives::*};

pub type Result<T> = std::result::Result<T, crate::error::AppError>;

pub(crate) use geofix_core::{gateways::geocode::ReverseGeocodingGateway, usecases};
pub(crate) use geofix_db_sqlite as sqlite;
