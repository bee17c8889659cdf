use super::*;
use usecases::PassSummary;

pub fn relink_drives(connections: &sqlite::Connections) -> Result<PassSummary> {
    let mut connection = connections.exclusive()?;
    let summary = connection
        .transaction(|conn| usecases::relink_drives(conn))
        .inspect_err(|err| {
            log::warn!("Failed to relink drives: {err}");
        })?;
    Ok(summary)
}
