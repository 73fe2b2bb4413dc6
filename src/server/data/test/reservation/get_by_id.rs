use super::*;

/// Tests getting a reservation by its id.
///
/// Verifies that the repository returns the stored reservation with its
/// window and owner intact.
///
/// Expected: Ok with Some(reservation)
#[tokio::test]
async fn gets_reservation_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let found = repo.get_by_id(reservation.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, reservation.id);
    assert_eq!(found.meeting_room_id, room.id);
    assert_eq!(found.user_id, Some(user.id));
    assert_eq!(found.window.from_reserve, reservation.from_reserve);
    assert_eq!(found.window.to_reserve, reservation.to_reserve);

    Ok(())
}

/// Tests getting a reservation that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let found = repo.get_by_id(99999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that ownerless legacy rows load without an owner.
///
/// Rows created before owner tracking have a null user_id and must still
/// round-trip through the repository.
///
/// Expected: Ok with user_id None
#[tokio::test]
async fn loads_ownerless_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_meeting_room(db).await?;
    let legacy = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(None)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let found = repo.get_by_id(legacy.id).await?.unwrap();

    assert_eq!(found.user_id, None);

    Ok(())
}
