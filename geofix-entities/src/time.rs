use std::fmt;
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time with a precision of whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Invalid timestamp: {0}")]
pub struct InvalidTimestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        // Drop the sub-second part to keep values comparable after storing them.
        Self(now.replace_nanosecond(0).unwrap_or(now))
    }

    pub fn try_from_secs(secs: i64) -> Result<Self, InvalidTimestamp> {
        OffsetDateTime::from_unix_timestamp(secs)
            .map(Self)
            .map_err(|_| InvalidTimestamp(secs))
    }

    pub const fn as_secs(&self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_secs() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::try_from_secs(t1.as_secs()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn reject_out_of_range_secs() {
        assert!(Timestamp::try_from_secs(i64::MAX).is_err());
    }

    #[test]
    fn display_as_rfc3339() {
        let ts = Timestamp::try_from_secs(0).unwrap();
        assert_eq!("1970-01-01T00:00:00Z", ts.to_string());
    }
}
