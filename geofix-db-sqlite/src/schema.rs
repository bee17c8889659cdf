///////////////////////////////////////////////////////////////////////
// Positions
///////////////////////////////////////////////////////////////////////

table! {
    positions (id) {
        id -> BigInt,
        latitude -> Double,
        longitude -> Double,
    }
}

///////////////////////////////////////////////////////////////////////
// Addresses
///////////////////////////////////////////////////////////////////////

table! {
    addresses (id) {
        id -> BigInt,
        display_name -> Text,
        latitude -> Double,
        longitude -> Double,
        name -> Text,
        house_number -> Nullable<Text>,
        road -> Nullable<Text>,
        neighbourhood -> Nullable<Text>,
        city -> Nullable<Text>,
        county -> Nullable<Text>,
        postcode -> Nullable<Text>,
        state -> Nullable<Text>,
        state_district -> Nullable<Text>,
        country -> Nullable<Text>,
        raw -> Text,
        inserted_at -> BigInt,
        updated_at -> BigInt,
        osm_id -> BigInt,
        osm_type -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Drives
///////////////////////////////////////////////////////////////////////

table! {
    drives (id) {
        id -> BigInt,
        start_position_id -> BigInt,
        end_position_id -> BigInt,
        start_address_id -> Nullable<BigInt>,
        end_address_id -> Nullable<BigInt>,
    }
}

allow_tables_to_appear_in_same_query!(positions, addresses, drives);
