use crate::id::*;
use strum::{Display, EnumIter, EnumString};

/// One of the two ends of a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DriveSide {
    Start,
    End,
}

/// A recorded trip from one position to another.
///
/// The address references are optional because the address
/// of a position might not have been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    pub id: DriveId,
    pub start_point_id: PointId,
    pub end_point_id: PointId,
    pub start_address_id: Option<AddressId>,
    pub end_address_id: Option<AddressId>,
}

impl Drive {
    /// A drive is broken if at least one of its address
    /// references is missing.
    pub const fn is_broken(&self) -> bool {
        self.start_address_id.is_none() || self.end_address_id.is_none()
    }

    pub const fn point_id(&self, side: DriveSide) -> PointId {
        match side {
            DriveSide::Start => self.start_point_id,
            DriveSide::End => self.end_point_id,
        }
    }

    pub const fn address_id(&self, side: DriveSide) -> Option<AddressId> {
        match side {
            DriveSide::Start => self.start_address_id,
            DriveSide::End => self.end_address_id,
        }
    }

    pub fn set_address_id(&mut self, side: DriveSide, address_id: AddressId) {
        match side {
            DriveSide::Start => self.start_address_id = Some(address_id),
            DriveSide::End => self.end_address_id = Some(address_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn drive() -> Drive {
        Drive {
            id: DriveId::new(1),
            start_point_id: PointId::new(10),
            end_point_id: PointId::new(11),
            start_address_id: None,
            end_address_id: None,
        }
    }

    #[test]
    fn broken_until_both_sides_are_linked() {
        let mut d = drive();
        assert!(d.is_broken());
        d.set_address_id(DriveSide::Start, AddressId::new(5));
        assert!(d.is_broken());
        d.set_address_id(DriveSide::End, AddressId::new(6));
        assert!(!d.is_broken());
        assert_eq!(Some(AddressId::new(5)), d.address_id(DriveSide::Start));
        assert_eq!(Some(AddressId::new(6)), d.address_id(DriveSide::End));
    }

    #[test]
    fn point_ids_per_side() {
        let d = drive();
        let ids: Vec<_> = DriveSide::iter().map(|side| d.point_id(side)).collect();
        assert_eq!(vec![PointId::new(10), PointId::new(11)], ids);
    }

    #[test]
    fn side_names() {
        assert_eq!("start", DriveSide::Start.to_string());
        assert_eq!(DriveSide::End, "end".parse().unwrap());
    }
}
