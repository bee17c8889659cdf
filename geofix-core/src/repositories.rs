// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait DriveRepo {
    /// All drives with at least one missing address reference.
    fn find_broken_drives(&self) -> Result<Vec<Drive>>;

    // Overwrites any existing reference of the given side.
    fn update_drive_address(
        &self,
        drive_id: DriveId,
        side: DriveSide,
        address_id: AddressId,
    ) -> Result<()>;
}

pub trait PointRepo {
    fn get_point(&self, id: PointId) -> Result<Point>;
}

pub trait AddressRepo {
    /// Find an address by exact comparison of both latitude
    /// and longitude. If multiple addresses share the same
    /// position the one that has been stored first is returned.
    fn find_address_by_coordinate(&self, pos: Coordinate) -> Result<Option<Address>>;

    fn insert_address(&self, new_address: NewAddress) -> Result<Address>;
}
