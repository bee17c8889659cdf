use super::*;

impl DriveRepo for DbReadWrite<'_> {
    fn find_broken_drives(&self) -> Result<Vec<Drive>> {
        find_broken_drives(&mut self.conn.borrow_mut())
    }
    fn update_drive_address(
        &self,
        drive_id: DriveId,
        side: DriveSide,
        address_id: AddressId,
    ) -> Result<()> {
        update_drive_address(&mut self.conn.borrow_mut(), drive_id, side, address_id)
    }
}

impl DriveRepo for DbConnection<'_> {
    fn find_broken_drives(&self) -> Result<Vec<Drive>> {
        find_broken_drives(&mut self.conn.borrow_mut())
    }
    fn update_drive_address(
        &self,
        drive_id: DriveId,
        side: DriveSide,
        address_id: AddressId,
    ) -> Result<()> {
        update_drive_address(&mut self.conn.borrow_mut(), drive_id, side, address_id)
    }
}

impl DriveRepo for DbReadOnly<'_> {
    fn find_broken_drives(&self) -> Result<Vec<Drive>> {
        find_broken_drives(&mut self.conn.borrow_mut())
    }
    fn update_drive_address(
        &self,
        _drive_id: DriveId,
        _side: DriveSide,
        _address_id: AddressId,
    ) -> Result<()> {
        Err(read_only_err())
    }
}

fn find_broken_drives(conn: &mut SqliteConnection) -> Result<Vec<Drive>> {
    use schema::drives::dsl;
    Ok(dsl::drives
        .filter(
            dsl::start_address_id
                .is_null()
                .or(dsl::end_address_id.is_null()),
        )
        .order_by(dsl::id)
        .load::<models::Drive>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_drive)
        .collect())
}

fn update_drive_address(
    conn: &mut SqliteConnection,
    drive_id: DriveId,
    side: DriveSide,
    address_id: AddressId,
) -> Result<()> {
    use schema::drives::dsl;
    let address_id = Some(address_id.to_inner());
    let target = dsl::drives.find(drive_id.to_inner());
    let count = match side {
        DriveSide::Start => diesel::update(target)
            .set(dsl::start_address_id.eq(address_id))
            .execute(conn),
        DriveSide::End => diesel::update(target)
            .set(dsl::end_address_id.eq(address_id))
            .execute(conn),
    }
    .map_err(from_diesel_err)?;
    if count == 0 {
        log::warn!("Drive {drive_id} not found");
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn load_drive(drive: models::Drive) -> Drive {
    let models::Drive {
        id,
        start_position_id,
        end_position_id,
        start_address_id,
        end_address_id,
    } = drive;
    Drive {
        id: id.into(),
        start_point_id: start_position_id.into(),
        end_point_id: end_position_id.into(),
        start_address_id: start_address_id.map(Into::into),
        end_address_id: end_address_id.map(Into::into),
    }
}

/// Store a new drive.
///
/// Drives are recorded by the trip tracker. This function
/// is only needed for importing or seeding a database.
pub fn create_drive(
    conn: &DbConnection,
    start_point_id: PointId,
    end_point_id: PointId,
) -> Result<DriveId> {
    insert_drive(&mut conn.conn.borrow_mut(), start_point_id, end_point_id)
}

fn insert_drive(
    conn: &mut SqliteConnection,
    start_point_id: PointId,
    end_point_id: PointId,
) -> Result<DriveId> {
    diesel::insert_into(schema::drives::table)
        .values(&models::NewDrive {
            start_position_id: start_point_id.to_inner(),
            end_position_id: end_point_id.to_inner(),
            start_address_id: None,
            end_address_id: None,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_rowid(conn).map(DriveId::from)
}
