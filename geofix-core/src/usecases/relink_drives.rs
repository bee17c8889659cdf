use super::{prelude::*, PassSummary, Skip, SkipReason};
use strum::IntoEnumIterator as _;

/// Link both ends of every broken drive to the stored address
/// of the corresponding position.
///
/// Both sides are written independently and unconditionally
/// if an address exists. Sides without an address and failed
/// writes are recorded in the summary.
pub fn relink_drives<R>(repo: &R) -> Result<PassSummary>
where
    R: RecordStore,
{
    let drives = repo.find_broken_drives()?;
    log::info!("Relinking {} broken drive(s)", drives.len());
    let mut summary = PassSummary::new(drives.len());
    for drive in &drives {
        for side in DriveSide::iter() {
            match relink_drive_side(repo, drive, side) {
                Ok(address) => {
                    log::info!(
                        "Linked {side} of drive {} to address {}: {}",
                        drive.id,
                        address.id,
                        address.display_name
                    );
                    summary.resolved += 1;
                }
                Err(skip) => summary.skip(skip),
            }
        }
    }
    log::info!("Relinked drives: {summary}");
    Ok(summary)
}

fn relink_drive_side<R>(
    repo: &R,
    drive: &Drive,
    side: DriveSide,
) -> std::result::Result<Address, Skip>
where
    R: RecordStore,
{
    let point_id = drive.point_id(side);
    let skip = |pos, reason| Skip {
        drive_id: drive.id,
        side,
        point_id,
        pos,
        reason,
    };
    let Point { pos, .. } = repo
        .get_point(point_id)
        .map_err(|err| skip(None, SkipReason::PointUnavailable(err.to_string())))?;
    let address = repo
        .find_address_by_coordinate(pos)
        .map_err(|err| skip(Some(pos), SkipReason::Lookup(err.to_string())))?
        .ok_or_else(|| skip(Some(pos), SkipReason::AddressMissing))?;
    repo.update_drive_address(drive.id, side, address.id)
        .map_err(|err| skip(Some(pos), SkipReason::LinkWrite(err.to_string())))?;
    Ok(address)
}
