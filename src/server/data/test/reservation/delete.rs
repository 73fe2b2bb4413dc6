use super::*;

/// Tests deleting a reservation.
///
/// Verifies that the row is removed and the deleted record is echoed back
/// for response building.
///
/// Expected: Ok with reservation deleted
#[tokio::test]
async fn deletes_reservation_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let existing = repo.get_by_id(reservation.id).await?.unwrap();
    let deleted = repo.delete(existing).await?;

    assert_eq!(deleted.id, reservation.id);

    let db_reservation = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_none());

    Ok(())
}

/// Tests that deleting one reservation leaves others alone.
///
/// Expected: Ok with only the target row removed
#[tokio::test]
async fn delete_does_not_affect_other_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    let target = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(1), now + Duration::hours(2))
        .build()
        .await?;
    let survivor = factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user.id))
        .window(now + Duration::hours(3), now + Duration::hours(4))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let existing = repo.get_by_id(target.id).await?.unwrap();
    repo.delete(existing).await?;

    let db_survivor = entity::prelude::Reservation::find_by_id(survivor.id)
        .one(db)
        .await?;
    assert!(db_survivor.is_some());

    Ok(())
}
