use super::*;

/// Tests the privileged full listing.
///
/// Expected: Ok with every reservation, owner field included
#[tokio::test]
async fn superuser_lists_all_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_superuser(db).await?);
    let user_a = factory::create_user(db).await?;
    let user_b = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    let now = Utc::now();
    factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user_a.id))
        .window(now + Duration::hours(1), now + Duration::hours(2))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, room.id)
        .owner(Some(user_b.id))
        .window(now + Duration::hours(3), now + Duration::hours(4))
        .build()
        .await?;

    let service = ReservationService::new(db);
    let all = service.get_all(&admin).await.unwrap();

    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|r| r.user_id.is_some()));

    Ok(())
}

/// Tests that regular users cannot use the full listing.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_listing_for_regular_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let service = ReservationService::new(db);
    let result = service.get_all(&user).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}
