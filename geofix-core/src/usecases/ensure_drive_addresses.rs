use super::{prelude::*, resolve_address, Resolution, Skip, SkipReason, PassSummary};
use std::collections::HashSet;
use strum::IntoEnumIterator as _;

/// Make sure that an address exists for both ends of every broken drive.
///
/// Each distinct position is resolved at most once per pass, even if the
/// provider fails for it. Failures are recorded in the summary and never
/// abort the pass. Only a failing query for broken drives is fatal.
pub fn ensure_drive_addresses<R, G>(repo: &R, geocoder: &G) -> Result<PassSummary>
where
    R: RecordStore,
    G: ReverseGeocodingGateway,
{
    let drives = repo.find_broken_drives()?;
    log::info!("Ensuring addresses of {} broken drive(s)", drives.len());
    let mut summary = PassSummary::new(drives.len());
    let mut visited = HashSet::new();
    for drive in &drives {
        for side in DriveSide::iter() {
            match ensure_address(repo, geocoder, drive, side, &mut visited) {
                Ok(Some(resolution)) => {
                    summary.resolved += 1;
                    if resolution.is_created() {
                        summary.created += 1;
                    }
                }
                Ok(None) => (),
                Err(skip) => summary.skip(skip),
            }
        }
    }
    log::info!("Ensured drive addresses: {summary}");
    Ok(summary)
}

// Returns `None` if the position has already been handled during this pass.
fn ensure_address<R, G>(
    repo: &R,
    geocoder: &G,
    drive: &Drive,
    side: DriveSide,
    visited: &mut HashSet<Coordinate>,
) -> std::result::Result<Option<Resolution>, Skip>
where
    R: RecordStore,
    G: ReverseGeocodingGateway,
{
    let point_id = drive.point_id(side);
    let skip = |pos, reason| Skip {
        drive_id: drive.id,
        side,
        point_id,
        pos,
        reason,
    };
    let Point { pos, .. } = repo
        .get_point(point_id)
        .map_err(|err| skip(None, SkipReason::PointUnavailable(err.to_string())))?;
    if !visited.insert(pos) {
        log::debug!("Position {pos} of drive {} has already been handled", drive.id);
        return Ok(None);
    }
    resolve_address(repo, geocoder, pos)
        .map(Some)
        .map_err(|err| skip(Some(pos), err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    #[test]
    fn fetch_each_distinct_position_once() {
        let db = MockDb::default();
        let shared = Coordinate::from_lat_lng_deg(1.0, 2.0);
        let a = Coordinate::from_lat_lng_deg(3.0, 4.0);
        let b = Coordinate::from_lat_lng_deg(5.0, 6.0);
        db.add_point(1, shared);
        db.add_point(2, a);
        db.add_point(3, shared);
        db.add_point(4, b);
        db.add_drive(broken_drive(1, 1, 2));
        db.add_drive(broken_drive(2, 3, 4));
        let geocoder = MockGeocoder::default()
            .with_display_name(shared, "Shared")
            .with_display_name(a, "A")
            .with_display_name(b, "B");

        let summary = ensure_drive_addresses(&db, &geocoder).unwrap();

        assert_eq!(2, summary.broken_drives);
        assert_eq!(3, summary.resolved);
        assert_eq!(3, summary.created);
        assert!(summary.skipped.is_empty());
        assert_eq!(1, geocoder.calls_for(shared));
        assert_eq!(3, geocoder.calls());
        assert_eq!(3, db.addresses.borrow().len());
    }

    #[test]
    fn resolve_both_sides_if_only_one_is_missing() {
        let db = MockDb::default();
        let start = Coordinate::from_lat_lng_deg(1.0, 2.0);
        let end = Coordinate::from_lat_lng_deg(3.0, 4.0);
        db.add_point(1, start);
        db.add_point(2, end);
        let linked = db.add_address(start, "Linked");
        let mut drive = broken_drive(1, 1, 2);
        drive.set_address_id(DriveSide::Start, linked.id);
        db.add_drive(drive);
        let geocoder = MockGeocoder::default().with_display_name(end, "End");

        let summary = ensure_drive_addresses(&db, &geocoder).unwrap();

        assert_eq!(2, summary.resolved);
        assert_eq!(1, summary.created);
        assert_eq!(0, geocoder.calls_for(start));
        assert_eq!(1, geocoder.calls_for(end));
    }

    #[test]
    fn ignore_complete_drives() {
        let db = MockDb::default();
        db.add_point(1, Coordinate::from_lat_lng_deg(1.0, 2.0));
        db.add_point(2, Coordinate::from_lat_lng_deg(3.0, 4.0));
        db.add_drive(Drive {
            start_address_id: Some(AddressId::new(1)),
            end_address_id: Some(AddressId::new(2)),
            ..broken_drive(1, 1, 2)
        });
        let geocoder = MockGeocoder::default();

        let summary = ensure_drive_addresses(&db, &geocoder).unwrap();

        assert_eq!(PassSummary::default(), summary);
        assert_eq!(0, geocoder.calls());
    }

    #[test]
    fn continue_after_provider_failures() {
        let db = MockDb::default();
        let start = Coordinate::from_lat_lng_deg(1.0, 2.0);
        let end = Coordinate::from_lat_lng_deg(3.0, 4.0);
        db.add_point(1, start);
        db.add_point(2, end);
        db.add_drive(broken_drive(1, 1, 2));
        let geocoder = MockGeocoder::default().with_display_name(end, "End");

        let summary = ensure_drive_addresses(&db, &geocoder).unwrap();

        assert_eq!(1, summary.resolved);
        assert_eq!(1, summary.skipped.len());
        let skip = &summary.skipped[0];
        assert_eq!(DriveId::new(1), skip.drive_id);
        assert_eq!(DriveSide::Start, skip.side);
        assert_eq!(Some(start), skip.pos);
        assert!(matches!(skip.reason, SkipReason::Geocoding(_)));
        let addresses = db.addresses.borrow();
        assert_eq!(1, addresses.len());
        assert_eq!(end, addresses[0].pos);
    }

    #[test]
    fn do_not_retry_a_failed_position_within_the_same_pass() {
        let db = MockDb::default();
        let pos = Coordinate::from_lat_lng_deg(1.0, 2.0);
        db.add_point(1, pos);
        db.add_point(2, pos);
        db.add_drive(broken_drive(1, 1, 2));
        let geocoder = MockGeocoder::default();

        let summary = ensure_drive_addresses(&db, &geocoder).unwrap();

        assert_eq!(1, geocoder.calls_for(pos));
        assert_eq!(1, summary.skipped.len());
    }

    #[test]
    fn skip_missing_points() {
        let db = MockDb::default();
        let end = Coordinate::from_lat_lng_deg(3.0, 4.0);
        db.add_point(2, end);
        db.add_drive(broken_drive(1, 99, 2));
        let geocoder = MockGeocoder::default().with_display_name(end, "End");

        let summary = ensure_drive_addresses(&db, &geocoder).unwrap();

        assert_eq!(1, summary.resolved);
        assert_eq!(1, summary.skipped.len());
        let skip = &summary.skipped[0];
        assert_eq!(PointId::new(99), skip.point_id);
        assert_eq!(None, skip.pos);
        assert!(matches!(skip.reason, SkipReason::PointUnavailable(_)));
    }

    #[test]
    fn abort_if_broken_drives_cannot_be_queried() {
        let db = MockDb::default();
        db.fail_find_broken_drives.set(true);
        let geocoder = MockGeocoder::default();
        let err = ensure_drive_addresses(&db, &geocoder).unwrap_err();
        assert!(matches!(err, Error::Repo(_)));
    }
}
