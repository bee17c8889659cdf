pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use geofix_entities::{address::*, drive::*, geo::*, id::*, point::*, time::*};
}
