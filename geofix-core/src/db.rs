use crate::repositories::*;

/// Transactional access to drives, points and addresses.
///
/// Implemented by every type that provides all repositories.
/// All operations participate in the transaction of the
/// underlying connection, if any.
pub trait RecordStore: DriveRepo + PointRepo + AddressRepo {}

impl<T> RecordStore for T where T: DriveRepo + PointRepo + AddressRepo {}
