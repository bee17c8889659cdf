#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geofix-entities
//!
//! Reusable, agnostic domain entities for geofix.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod drive;
pub mod geo;
pub mod id;
pub mod point;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
