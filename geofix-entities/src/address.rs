use crate::{geo::*, id::*, time::*};

/// The structured parts of a postal address.
///
/// Each part is either present with the value reported by the
/// geocoding provider or absent.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressFields {
    pub house_number   : Option<String>,
    pub road           : Option<String>,
    pub neighbourhood  : Option<String>,
    pub city           : Option<String>,
    pub county         : Option<String>,
    pub postcode       : Option<String>,
    pub state          : Option<String>,
    pub state_district : Option<String>,
    pub country        : Option<String>,
}

impl AddressFields {
    pub fn is_empty(&self) -> bool {
        let Self {
            house_number,
            road,
            neighbourhood,
            city,
            county,
            postcode,
            state,
            state_district,
            country,
        } = self;
        house_number.is_none()
            && road.is_none()
            && neighbourhood.is_none()
            && city.is_none()
            && county.is_none()
            && postcode.is_none()
            && state.is_none()
            && state_district.is_none()
            && country.is_none()
    }
}

/// Identifies the entity of the geocoding provider
/// that an address has been derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRef {
    pub id: i64,
    pub kind: String,
}

/// An address that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub pos: Coordinate,
    pub display_name: String,
    pub name: String,
    pub fields: AddressFields,
    /// The serialized provider fields, kept verbatim for diagnostics.
    pub raw: String,
    pub provider: ProviderRef,
    pub inserted_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewAddress {
    pub fn into_address(self, id: AddressId) -> Address {
        let Self {
            pos,
            display_name,
            name,
            fields,
            raw,
            provider,
            inserted_at,
            updated_at,
        } = self;
        Address {
            id,
            pos,
            display_name,
            name,
            fields,
            raw,
            provider,
            inserted_at,
            updated_at,
        }
    }
}

/// A stored address of a single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: AddressId,
    pub pos: Coordinate,
    pub display_name: String,
    pub name: String,
    pub fields: AddressFields,
    pub raw: String,
    pub provider: ProviderRef,
    pub inserted_at: Timestamp,
    pub updated_at: Timestamp,
}
