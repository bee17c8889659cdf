mod broken_drives;
mod ensure_drive_addresses;
mod error;
mod normalize_address;
mod reconcile;
mod relink_drives;
mod resolve_address;
mod summary;

#[cfg(test)]
pub mod tests;

pub use self::{
    broken_drives::*, ensure_drive_addresses::*, error::Error, normalize_address::*,
    reconcile::*, relink_drives::*, resolve_address::*, summary::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        gateways::geocode::{ProviderAddress, ReverseGeocodingGateway},
        repositories::*,
    };
}
