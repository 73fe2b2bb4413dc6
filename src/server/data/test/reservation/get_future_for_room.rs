use super::*;

/// Tests listing a room's upcoming reservations.
///
/// Verifies that only rows for the requested room whose window ends after
/// the cutoff are returned, in start order.
///
/// Expected: Ok with future reservations only
#[tokio::test]
async fn gets_future_reservations_for_room() -> Result<(), DbErr> {
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
    // Fully in the past
    factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now - Duration::hours(3), now - Duration::hours(2))
        .build()
        .await?;
    // In progress, ends after the cutoff
    let in_progress = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now - Duration::minutes(30), now + Duration::minutes(30))
        .build()
        .await?;
    let upcoming = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(2), now + Duration::hours(3))
        .build()
        .await?;
    // Other room, must not appear
    factory::reservation::ReservationFactory::new(db, other_room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(2), now + Duration::hours(3))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let found = repo.get_future_for_room(room.id, now).await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, in_progress.id);
    assert_eq!(found[1].id, upcoming.id);

    Ok(())
}

/// Tests listing upcoming reservations for a room with only past bookings.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn gets_empty_list_when_all_past() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now - Duration::hours(2), now - Duration::hours(1))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let found = repo.get_future_for_room(room.id, now).await?;

    assert!(found.is_empty());

    Ok(())
}
