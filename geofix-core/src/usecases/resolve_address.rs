use super::prelude::*;
use super::normalize_address;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The address was already stored.
    Existing(Address),
    /// The address has been fetched from the provider and stored.
    Created(Address),
}

impl Resolution {
    pub const fn address(&self) -> &Address {
        match self {
            Self::Existing(address) | Self::Created(address) => address,
        }
    }

    pub fn into_address(self) -> Address {
        match self {
            Self::Existing(address) | Self::Created(address) => address,
        }
    }

    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Return the stored address of a position or fetch and store a new one.
///
/// Stored addresses are never refreshed. Nothing is written if the
/// provider fails.
///
/// No lock is held between the lookup and the insert. Concurrent
/// callers might store the same position twice. Both rows carry
/// identical coordinates and either of them is a valid link target.
pub fn resolve_address<R, G>(repo: &R, geocoder: &G, pos: Coordinate) -> Result<Resolution>
where
    R: AddressRepo,
    G: ReverseGeocodingGateway,
{
    if let Some(address) = repo.find_address_by_coordinate(pos)? {
        log::debug!("Found existing address {} for {pos}", address.id);
        return Ok(Resolution::Existing(address));
    }
    let provider_address = geocoder.reverse_geocode(pos)?;
    let new_address = normalize_address(provider_address, pos);
    let address = repo.insert_address(new_address)?;
    log::info!(
        "Stored address {} for {pos}: {}",
        address.id,
        address.display_name
    );
    Ok(Resolution::Created(address))
}
