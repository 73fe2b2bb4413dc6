use super::*;

/// Tests cancelling an owned reservation.
///
/// Expected: Ok with the removed reservation echoed back
#[tokio::test]
async fn deletes_own_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_entity = factory::create_user(db).await?;
    let user = User::from_entity(user_entity.clone());
    let room = factory::create_meeting_room(db).await?;
    let reservation = factory::create_reservation(db, room.id, user_entity.id).await?;

    let service = ReservationService::new(db);
    let deleted = service.delete(&user, reservation.id).await.unwrap();

    assert_eq!(deleted.id, reservation.id);

    let db_reservation = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_none());

    Ok(())
}

/// Tests that a user cannot cancel someone else's reservation.
///
/// Expected: Err(AccessDenied), row untouched
#[tokio::test]
async fn rejects_delete_by_non_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = User::from_entity(factory::create_user(db).await?);
    let room = factory::create_meeting_room(db).await?;
    let reservation = factory::create_reservation(db, room.id, owner.id).await?;

    let service = ReservationService::new(db);
    let result = service.delete(&intruder, reservation.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    let db_reservation = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_some());

    Ok(())
}

/// Tests that a superuser can cancel anyone's reservation.
///
/// Expected: Ok
#[tokio::test]
async fn superuser_deletes_any_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = User::from_entity(factory::user::create_superuser(db).await?);
    let room = factory::create_meeting_room(db).await?;
    let reservation = factory::create_reservation(db, room.id, owner.id).await?;

    let service = ReservationService::new(db);
    let result = service.delete(&admin, reservation.id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests cancelling a reservation that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_delete_of_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let service = ReservationService::new(db);
    let result = service.delete(&user, 99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the cancel-then-rebook lifecycle.
///
/// A window is booked, a second user's request for the same window
/// conflicts, and after the first booking is cancelled the retry succeeds.
///
/// Expected: conflict before the cancel, Ok after
#[tokio::test]
async fn cancelled_window_becomes_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = User::from_entity(factory::create_user(db).await?);
    let second = User::from_entity(factory::create_user(db).await?);
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    let dto = CreateReservationDto {
        meeting_room_id: room.id,
        from_reserve: now + Duration::hours(1),
        to_reserve: now + Duration::hours(2),
    };

    let service = ReservationService::new(db);
    let booked = service.create(&first, dto.clone(), now).await.unwrap();

    let conflict = service.create(&second, dto.clone(), now).await;
    assert!(matches!(
        conflict,
        Err(AppError::ReservationErr(ReservationError::Overlap { .. }))
    ));

    service.delete(&first, booked.id).await.unwrap();

    let retry = service.create(&second, dto, now).await;
    assert!(retry.is_ok());

    Ok(())
}
