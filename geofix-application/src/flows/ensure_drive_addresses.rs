use super::*;
use usecases::PassSummary;

/// Ensure the addresses of all broken drives within a single transaction.
///
/// Addresses that have been stored successfully are committed even
/// if other positions could not be resolved.
pub fn ensure_drive_addresses<G>(
    connections: &sqlite::Connections,
    geocoder: &G,
) -> Result<PassSummary>
where
    G: ReverseGeocodingGateway,
{
    let mut connection = connections.exclusive()?;
    let summary = connection
        .transaction(|conn| usecases::ensure_drive_addresses(conn, geocoder))
        .inspect_err(|err| {
            log::warn!("Failed to ensure drive addresses: {err}");
        })?;
    Ok(summary)
}
