use super::prelude::*;
use std::fmt;

/// Why a single drive side has been skipped during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The referenced point could not be loaded.
    PointUnavailable(String),
    /// Looking up or storing the address failed.
    Lookup(String),
    /// The geocoding provider did not return an address.
    Geocoding(String),
    /// No address has been stored for the position yet.
    AddressMissing,
    /// Writing the address reference of the drive failed.
    LinkWrite(String),
}

impl From<Error> for SkipReason {
    fn from(err: Error) -> Self {
        match err {
            Error::Geocoding(err) => Self::Geocoding(err.to_string()),
            Error::Repo(err) => Self::Lookup(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PointUnavailable(err) => write!(f, "point unavailable: {err}"),
            Self::Lookup(err) => write!(f, "address lookup failed: {err}"),
            Self::Geocoding(err) => write!(f, "geocoding failed: {err}"),
            Self::AddressMissing => f.write_str("no address stored yet"),
            Self::LinkWrite(err) => write!(f, "updating the drive failed: {err}"),
        }
    }
}

/// A drive side that could not be processed.
///
/// Contains everything that is needed for retrying
/// it manually.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub drive_id: DriveId,
    pub side: DriveSide,
    pub point_id: PointId,
    /// Unknown if the point could not be loaded.
    pub pos: Option<Coordinate>,
    pub reason: SkipReason,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Self {
            drive_id,
            side,
            point_id,
            pos,
            reason,
        } = self;
        write!(f, "drive {drive_id} ({side} point {point_id}")?;
        if let Some(pos) = pos {
            write!(f, " at {pos}")?;
        }
        write!(f, "): {reason}")
    }
}

/// The outcome of a single pass over all broken drives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassSummary {
    pub broken_drives: usize,
    /// Ensured addresses or written address references.
    pub resolved: usize,
    /// Newly stored addresses, a subset of `resolved`.
    pub created: usize,
    pub skipped: Vec<Skip>,
}

impl PassSummary {
    pub(crate) fn new(broken_drives: usize) -> Self {
        Self {
            broken_drives,
            ..Default::default()
        }
    }

    pub(crate) fn skip(&mut self, skip: Skip) {
        log::warn!("Skipped {skip}");
        self.skipped.push(skip);
    }
}

impl fmt::Display for PassSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Self {
            broken_drives,
            resolved,
            created,
            skipped,
        } = self;
        write!(
            f,
            "{broken_drives} broken drive(s), {resolved} resolved ({created} created), {} skipped",
            skipped.len()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileSummary {
    pub ensured: PassSummary,
    pub relinked: PassSummary,
}
