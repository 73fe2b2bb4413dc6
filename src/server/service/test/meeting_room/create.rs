use super::*;

/// Tests room creation by a superuser.
///
/// Expected: Ok with the created room
#[tokio::test]
async fn superuser_creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_superuser(db).await?);

    let service = MeetingRoomService::new(db);
    let created = service
        .create(
            &admin,
            CreateMeetingRoomDto {
                name: "Fishbowl".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.name, "Fishbowl");

    Ok(())
}

/// Tests that regular users cannot create rooms.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_creation_by_regular_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let service = MeetingRoomService::new(db);
    let result = service
        .create(
            &user,
            CreateMeetingRoomDto {
                name: "Fishbowl".to_string(),
                description: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests that room names must be unique.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_room_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_superuser(db).await?);

    let service = MeetingRoomService::new(db);
    service
        .create(
            &admin,
            CreateMeetingRoomDto {
                name: "Fishbowl".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

    let result = service
        .create(
            &admin,
            CreateMeetingRoomDto {
                name: "Fishbowl".to_string(),
                description: Some("duplicate".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
