pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::new_address_builder::*;

pub mod new_address_builder {

    use super::*;
    use crate::{address::*, geo::*, time::*};

    #[derive(Debug)]
    pub struct NewAddressBuild {
        addr: NewAddress,
    }

    impl NewAddressBuild {
        pub fn pos(mut self, pos: Coordinate) -> Self {
            self.addr.pos = pos;
            self
        }
        pub fn display_name(mut self, display_name: &str) -> Self {
            self.addr.display_name = display_name.into();
            self.addr.name = display_name
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_owned();
            self
        }
        pub fn road(mut self, road: Option<&str>) -> Self {
            self.addr.fields.road = road.map(Into::into);
            self
        }
        pub fn city(mut self, city: Option<&str>) -> Self {
            self.addr.fields.city = city.map(Into::into);
            self
        }
        pub fn provider(mut self, id: i64, kind: &str) -> Self {
            self.addr.provider = ProviderRef {
                id,
                kind: kind.into(),
            };
            self
        }
        pub fn finish(self) -> NewAddress {
            self.addr
        }
    }

    impl Builder for NewAddress {
        type Build = NewAddressBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            Self::Build {
                addr: NewAddress {
                    pos: Coordinate::from_lat_lng_deg(0.0, 0.0),
                    display_name: "".into(),
                    name: "".into(),
                    fields: Default::default(),
                    raw: "{}".into(),
                    provider: ProviderRef {
                        id: 0,
                        kind: "node".into(),
                    },
                    inserted_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
