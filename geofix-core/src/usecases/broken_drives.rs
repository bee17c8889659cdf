use super::prelude::*;

pub fn broken_drives<R>(repo: &R) -> Result<Vec<Drive>>
where
    R: DriveRepo,
{
    let drives = repo.find_broken_drives()?;
    debug_assert!(drives.iter().all(Drive::is_broken));
    Ok(drives)
}
