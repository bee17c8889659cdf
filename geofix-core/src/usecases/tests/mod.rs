use crate::{
    entities::*,
    gateways::geocode::{self, ProviderAddress, ReverseGeocodingGateway},
    repositories::{Error as RepoError, *},
};
use serde_json::{json, Value};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result,
};

type RepoResult<T> = result::Result<T, RepoError>;

pub fn broken_drive(id: i64, start_point: i64, end_point: i64) -> Drive {
    Drive {
        id: id.into(),
        start_point_id: start_point.into(),
        end_point_id: end_point.into(),
        start_address_id: None,
        end_address_id: None,
    }
}

#[derive(Default)]
pub struct MockDb {
    pub drives: RefCell<Vec<Drive>>,
    pub points: RefCell<Vec<Point>>,
    pub addresses: RefCell<Vec<Address>>,
    pub fail_find_broken_drives: Cell<bool>,
    pub failing_drive_updates: RefCell<Vec<DriveId>>,
    pub drive_updates: Cell<usize>,
}

impl MockDb {
    pub fn add_point(&self, id: i64, pos: Coordinate) -> Point {
        let point = Point { id: id.into(), pos };
        self.points.borrow_mut().push(point);
        point
    }

    pub fn add_drive(&self, drive: Drive) {
        self.drives.borrow_mut().push(drive);
    }

    pub fn add_address(&self, pos: Coordinate, display_name: &str) -> Address {
        use geofix_entities::builders::Builder as _;
        let new_address = NewAddress::build()
            .pos(pos)
            .display_name(display_name)
            .finish();
        self.insert_address(new_address).unwrap()
    }

    pub fn drive(&self, id: i64) -> Drive {
        let id = DriveId::from(id);
        self.drives
            .borrow()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .unwrap()
    }
}

impl DriveRepo for MockDb {
    fn find_broken_drives(&self) -> RepoResult<Vec<Drive>> {
        if self.fail_find_broken_drives.get() {
            return Err(RepoError::Other(anyhow::anyhow!("database unavailable")));
        }
        Ok(self
            .drives
            .borrow()
            .iter()
            .filter(|d| d.is_broken())
            .cloned()
            .collect())
    }

    fn update_drive_address(
        &self,
        drive_id: DriveId,
        side: DriveSide,
        address_id: AddressId,
    ) -> RepoResult<()> {
        if self.failing_drive_updates.borrow().contains(&drive_id) {
            return Err(RepoError::Other(anyhow::anyhow!("drive is locked")));
        }
        let mut drives = self.drives.borrow_mut();
        let drive = drives
            .iter_mut()
            .find(|d| d.id == drive_id)
            .ok_or(RepoError::NotFound)?;
        drive.set_address_id(side, address_id);
        self.drive_updates.set(self.drive_updates.get() + 1);
        Ok(())
    }
}

impl PointRepo for MockDb {
    fn get_point(&self, id: PointId) -> RepoResult<Point> {
        self.points
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .copied()
            .ok_or(RepoError::NotFound)
    }
}

impl AddressRepo for MockDb {
    fn find_address_by_coordinate(&self, pos: Coordinate) -> RepoResult<Option<Address>> {
        Ok(self
            .addresses
            .borrow()
            .iter()
            .find(|a| a.pos == pos)
            .cloned())
    }

    fn insert_address(&self, new_address: NewAddress) -> RepoResult<Address> {
        let mut addresses = self.addresses.borrow_mut();
        let id = AddressId::new(addresses.len() as i64 + 1);
        let address = new_address.into_address(id);
        addresses.push(address.clone());
        Ok(address)
    }
}

/// Answers with prepared addresses and fails for
/// all other positions.
#[derive(Default)]
pub struct MockGeocoder {
    responses: HashMap<Coordinate, ProviderAddress>,
    calls: RefCell<Vec<Coordinate>>,
}

impl MockGeocoder {
    pub fn with_display_name(mut self, pos: Coordinate, display_name: &str) -> Self {
        let Value::Object(fields) = json!({ "road": display_name }) else {
            unreachable!();
        };
        let response = ProviderAddress {
            display_name: display_name.into(),
            fields,
            entity_id: self.responses.len() as i64 + 1,
            entity_type: "node".into(),
        };
        self.responses.insert(pos, response);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls_for(&self, pos: Coordinate) -> usize {
        self.calls.borrow().iter().filter(|p| **p == pos).count()
    }
}

impl ReverseGeocodingGateway for MockGeocoder {
    fn reverse_geocode(&self, pos: Coordinate) -> Result<ProviderAddress, geocode::Error> {
        self.calls.borrow_mut().push(pos);
        self.responses
            .get(&pos)
            .cloned()
            .ok_or(geocode::Error::NotFound)
    }
}
