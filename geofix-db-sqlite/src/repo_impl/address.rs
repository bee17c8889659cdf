use super::*;

impl AddressRepo for DbReadWrite<'_> {
    fn find_address_by_coordinate(&self, pos: Coordinate) -> Result<Option<Address>> {
        find_address_by_coordinate(&mut self.conn.borrow_mut(), pos)
    }
    fn insert_address(&self, new_address: NewAddress) -> Result<Address> {
        insert_address(&mut self.conn.borrow_mut(), new_address)
    }
}

impl AddressRepo for DbConnection<'_> {
    fn find_address_by_coordinate(&self, pos: Coordinate) -> Result<Option<Address>> {
        find_address_by_coordinate(&mut self.conn.borrow_mut(), pos)
    }
    fn insert_address(&self, new_address: NewAddress) -> Result<Address> {
        insert_address(&mut self.conn.borrow_mut(), new_address)
    }
}

impl AddressRepo for DbReadOnly<'_> {
    fn find_address_by_coordinate(&self, pos: Coordinate) -> Result<Option<Address>> {
        find_address_by_coordinate(&mut self.conn.borrow_mut(), pos)
    }
    fn insert_address(&self, _new_address: NewAddress) -> Result<Address> {
        Err(read_only_err())
    }
}

fn find_address_by_coordinate(
    conn: &mut SqliteConnection,
    pos: Coordinate,
) -> Result<Option<Address>> {
    use schema::addresses::dsl;
    let (lat, lng) = pos.to_lat_lng_deg();
    // Duplicates are possible, the oldest one wins
    dsl::addresses
        .filter(dsl::latitude.eq(lat))
        .filter(dsl::longitude.eq(lng))
        .order_by(dsl::id.asc())
        .first::<models::Address>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_address)
        .transpose()
}

fn insert_address(conn: &mut SqliteConnection, new_address: NewAddress) -> Result<Address> {
    let NewAddress {
        pos,
        display_name,
        name,
        fields,
        raw,
        provider,
        inserted_at,
        updated_at,
    } = &new_address;
    let AddressFields {
        house_number,
        road,
        neighbourhood,
        city,
        county,
        postcode,
        state,
        state_district,
        country,
    } = fields;
    let (latitude, longitude) = pos.to_lat_lng_deg();
    let insertable = models::NewAddress {
        display_name,
        latitude,
        longitude,
        name,
        house_number: house_number.as_deref(),
        road: road.as_deref(),
        neighbourhood: neighbourhood.as_deref(),
        city: city.as_deref(),
        county: county.as_deref(),
        postcode: postcode.as_deref(),
        state: state.as_deref(),
        state_district: state_district.as_deref(),
        country: country.as_deref(),
        raw,
        inserted_at: inserted_at.as_secs(),
        updated_at: updated_at.as_secs(),
        osm_id: provider.id,
        osm_type: &provider.kind,
    };
    diesel::insert_into(schema::addresses::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_rowid(conn)?;
    Ok(new_address.into_address(id.into()))
}

fn load_address(address: models::Address) -> Result<Address> {
    let models::Address {
        id,
        display_name,
        latitude,
        longitude,
        name,
        house_number,
        road,
        neighbourhood,
        city,
        county,
        postcode,
        state,
        state_district,
        country,
        raw,
        inserted_at,
        updated_at,
        osm_id,
        osm_type,
    } = address;
    let inserted_at = Timestamp::try_from_secs(inserted_at).map_err(anyhow::Error::from)?;
    let updated_at = Timestamp::try_from_secs(updated_at).map_err(anyhow::Error::from)?;
    Ok(Address {
        id: id.into(),
        pos: Coordinate::from_lat_lng_deg(latitude, longitude),
        display_name,
        name,
        fields: AddressFields {
            house_number,
            road,
            neighbourhood,
            city,
            county,
            postcode,
            state,
            state_district,
            country,
        },
        raw,
        provider: ProviderRef {
            id: osm_id,
            kind: osm_type,
        },
        inserted_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::connections;
    use geofix_entities::builders::*;

    #[test]
    fn insert_and_find_by_exact_coordinate() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let pos = Coordinate::from_lat_lng_deg(48.775_556, 9.182_778);
        let new_address = NewAddress::build()
            .pos(pos)
            .display_name("Schlossplatz, Stuttgart, Germany")
            .road(Some("Schlossplatz"))
            .city(Some("Stuttgart"))
            .provider(123, "way")
            .finish();

        let inserted = db.insert_address(new_address.clone()).unwrap();
        assert_eq!(new_address.into_address(inserted.id), inserted);

        let found = db.find_address_by_coordinate(pos).unwrap().unwrap();
        assert_eq!(inserted, found);
        assert_eq!("Schlossplatz", found.name);
        assert_eq!(None, found.fields.postcode);
        assert_eq!(123, found.provider.id);
        assert_eq!("way", found.provider.kind);

        let other_lng = Coordinate::from_lat_lng_deg(48.775_556, 9.0);
        assert!(db.find_address_by_coordinate(other_lng).unwrap().is_none());
        let other_lat = Coordinate::from_lat_lng_deg(48.0, 9.182_778);
        assert!(db.find_address_by_coordinate(other_lat).unwrap().is_none());
    }

    #[test]
    fn prefer_the_oldest_of_duplicate_addresses() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let pos = Coordinate::from_lat_lng_deg(1.0, 2.0);
        let first = db
            .insert_address(NewAddress::build().pos(pos).display_name("First").finish())
            .unwrap();
        let second = db
            .insert_address(NewAddress::build().pos(pos).display_name("Second").finish())
            .unwrap();
        assert_ne!(first.id, second.id);
        let found = db.find_address_by_coordinate(pos).unwrap().unwrap();
        assert_eq!(first.id, found.id);
    }

    #[test]
    fn reject_writes_with_read_only_connections() {
        let connections = connections();
        let db = connections.shared().unwrap();
        let new_address = NewAddress::build().display_name("Nowhere").finish();
        assert!(db.insert_address(new_address).is_err());
    }
}
