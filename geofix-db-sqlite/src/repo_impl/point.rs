use super::*;

impl PointRepo for DbReadWrite<'_> {
    fn get_point(&self, id: PointId) -> Result<Point> {
        get_point(&mut self.conn.borrow_mut(), id)
    }
}

impl PointRepo for DbConnection<'_> {
    fn get_point(&self, id: PointId) -> Result<Point> {
        get_point(&mut self.conn.borrow_mut(), id)
    }
}

impl PointRepo for DbReadOnly<'_> {
    fn get_point(&self, id: PointId) -> Result<Point> {
        get_point(&mut self.conn.borrow_mut(), id)
    }
}

fn get_point(conn: &mut SqliteConnection, id: PointId) -> Result<Point> {
    use schema::positions::dsl;
    let models::Position {
        id,
        latitude,
        longitude,
    } = dsl::positions
        .find(id.to_inner())
        .first::<models::Position>(conn)
        .map_err(from_diesel_err)?;
    Ok(Point {
        id: id.into(),
        pos: Coordinate::from_lat_lng_deg(latitude, longitude),
    })
}

/// Store a new position.
///
/// Positions are recorded by the trip tracker. This function
/// is only needed for importing or seeding a database.
pub fn create_point(conn: &DbConnection, pos: Coordinate) -> Result<PointId> {
    insert_position(&mut conn.conn.borrow_mut(), pos)
}

fn insert_position(conn: &mut SqliteConnection, pos: Coordinate) -> Result<PointId> {
    let (latitude, longitude) = pos.to_lat_lng_deg();
    diesel::insert_into(schema::positions::table)
        .values(&models::NewPosition {
            latitude,
            longitude,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_rowid(conn).map(PointId::from)
}
