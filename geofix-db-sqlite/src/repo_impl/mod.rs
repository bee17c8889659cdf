// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};

use geofix_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod address;
mod drive;
mod point;

pub use self::{drive::create_drive, point::create_point};

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function!(fn last_insert_rowid() -> diesel::sql_types::BigInt);

// The row id of the most recent successful insert on this connection.
fn last_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn read_only_err() -> repo::Error {
    anyhow!("Cannot write with a read-only connection").into()
}
