use super::*;

/// Tests creating a reservation for an existing room and user.
///
/// Verifies that the repository inserts the reservation with the given
/// window and owner and returns it with an assigned id.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_reservation_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    let window = ReservationWindow::new(now + Duration::hours(1), now + Duration::hours(2));

    let repo = ReservationRepository::new(db);
    let created = repo
        .create(CreateReservationParams {
            meeting_room_id: room.id,
            window,
            user_id: user.id,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.meeting_room_id, room.id);
    assert_eq!(created.user_id, Some(user.id));
    assert_eq!(created.window, window);

    // Verify the row exists in the database
    let db_reservation = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_some());

    Ok(())
}

/// Tests that created reservations always carry an owner.
///
/// Ownerless rows only exist as data predating owner tracking; every new
/// reservation is stamped with the creating user.
///
/// Expected: Ok with user_id set
#[tokio::test]
async fn created_reservation_has_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    let repo = ReservationRepository::new(db);
    let created = repo
        .create(CreateReservationParams {
            meeting_room_id: room.id,
            window: ReservationWindow::new(now + Duration::hours(3), now + Duration::hours(4)),
            user_id: user.id,
        })
        .await?;

    let db_reservation = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_reservation.user_id, Some(user.id));

    Ok(())
}
