use super::prelude::*;
use serde_json::{Map, Value};

// Some providers report house numbers without the underscore.
const HOUSE_NUMBER_KEYS: [&str; 2] = ["house_number", "housenumber"];

/// Convert a provider response into a storable address.
///
/// Never fails: missing fields and fields with unexpected
/// types are stored as absent values.
pub fn normalize_address(provider_address: ProviderAddress, pos: Coordinate) -> NewAddress {
    normalize_address_at(provider_address, pos, Timestamp::now())
}

fn normalize_address_at(
    provider_address: ProviderAddress,
    pos: Coordinate,
    now: Timestamp,
) -> NewAddress {
    let ProviderAddress {
        display_name,
        fields: provider_fields,
        entity_id,
        entity_type,
    } = provider_address;
    let name = short_name(&display_name);
    let raw = serialize_fields(&provider_fields);
    let text = |key: &str| text_field(&provider_fields, key);
    let fields = AddressFields {
        house_number: HOUSE_NUMBER_KEYS.into_iter().find_map(text),
        road: text("road"),
        neighbourhood: text("neighbourhood"),
        city: text("city"),
        county: text("county"),
        postcode: text("postcode"),
        state: text("state"),
        state_district: text("state_district"),
        country: text("country"),
    };
    if fields.is_empty() {
        log::debug!("No structured address fields reported for {pos}");
    }
    NewAddress {
        pos,
        display_name,
        name,
        fields,
        raw,
        provider: ProviderRef {
            id: entity_id,
            kind: entity_type,
        },
        inserted_at: now,
        updated_at: now,
    }
}

fn short_name(display_name: &str) -> String {
    display_name
        .split(',')
        .next()
        .map(str::trim)
        .unwrap_or_default()
        .to_owned()
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}

fn serialize_fields(fields: &Map<String, Value>) -> String {
    serde_json::to_string(fields).unwrap_or_else(|err| {
        log::warn!("Failed to serialize provider address fields: {err}");
        String::new()
    })
}
