#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use super::schema::*;

#[derive(Queryable)]
pub struct Position {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Insertable)]
#[diesel(table_name = positions)]
pub struct NewPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Queryable)]
pub struct Address {
    pub id: i64,
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub state_district: Option<String>,
    pub country: Option<String>,
    pub raw: String,
    pub inserted_at: i64,
    pub updated_at: i64,
    pub osm_id: i64,
    pub osm_type: String,
}

#[derive(Insertable)]
#[diesel(table_name = addresses)]
pub struct NewAddress<'a> {
    pub display_name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub name: &'a str,
    pub house_number: Option<&'a str>,
    pub road: Option<&'a str>,
    pub neighbourhood: Option<&'a str>,
    pub city: Option<&'a str>,
    pub county: Option<&'a str>,
    pub postcode: Option<&'a str>,
    pub state: Option<&'a str>,
    pub state_district: Option<&'a str>,
    pub country: Option<&'a str>,
    pub raw: &'a str,
    pub inserted_at: i64,
    pub updated_at: i64,
    pub osm_id: i64,
    pub osm_type: &'a str,
}

#[derive(Queryable)]
pub struct Drive {
    pub id: i64,
    pub start_position_id: i64,
    pub end_position_id: i64,
    pub start_address_id: Option<i64>,
    pub end_address_id: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = drives)]
pub struct NewDrive {
    pub start_position_id: i64,
    pub end_position_id: i64,
    pub start_address_id: Option<i64>,
    pub end_address_id: Option<i64>,
}
