use super::*;
use geofix_core::entities::Drive;

pub fn broken_drives(connections: &sqlite::Connections) -> Result<Vec<Drive>> {
    let db = connections.shared()?;
    Ok(usecases::broken_drives(&db)?)
}
