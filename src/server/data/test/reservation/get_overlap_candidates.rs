use super::*;

/// Tests fetching the overlap candidate set for a room.
///
/// Verifies that every reservation for the room is returned regardless of
/// its window, while other rooms' bookings stay out. Candidate filtering by
/// window happens in the service, not here.
///
/// Expected: Ok with all of the room's reservations
#[tokio::test]
async fn gets_all_candidates_for_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;
    let other_room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    let past = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now - Duration::hours(2), now - Duration::hours(1))
        .build()
        .await?;
    let future = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(1), now + Duration::hours(2))
        .build()
        .await?;
    factory::create_reservation(db, other_room.id, user.id).await?;

    let repo = ReservationRepository::new(db);
    let candidates = repo.get_overlap_candidates(room.id, None).await?;

    let mut ids: Vec<i32> = candidates.iter().map(|r| r.id).collect();
    ids.sort();
    assert_eq!(ids, vec![past.id, future.id]);

    Ok(())
}

/// Tests excluding one reservation from the candidate set.
///
/// An update must not conflict with the row being updated, so the fetch
/// can leave it out by id.
///
/// Expected: Ok without the excluded reservation
#[tokio::test]
async fn excludes_given_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    let excluded = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(1), now + Duration::hours(2))
        .build()
        .await?;
    let kept = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(3), now + Duration::hours(4))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let candidates = repo
        .get_overlap_candidates(room.id, Some(excluded.id))
        .await?;

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, kept.id);

    Ok(())
}
