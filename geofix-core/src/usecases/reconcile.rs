use super::{ensure_drive_addresses, prelude::*, relink_drives, ReconcileSummary};

/// Ensure the addresses of all broken drives and link them afterwards.
pub fn reconcile<R, G>(repo: &R, geocoder: &G) -> Result<ReconcileSummary>
where
    R: RecordStore,
    G: ReverseGeocodingGateway,
{
    let ensured = ensure_drive_addresses(repo, geocoder)?;
    let relinked = relink_drives(repo)?;
    Ok(ReconcileSummary { ensured, relinked })
}
