use super::*;
use usecases::ReconcileSummary;

/// Run both phases, each one in its own transaction.
pub fn reconcile<G>(connections: &sqlite::Connections, geocoder: &G) -> Result<ReconcileSummary>
where
    G: ReverseGeocodingGateway,
{
    let ensured = ensure_drive_addresses(connections, geocoder)?;
    let relinked = relink_drives(connections)?;
    Ok(ReconcileSummary { ensured, relinked })
}
