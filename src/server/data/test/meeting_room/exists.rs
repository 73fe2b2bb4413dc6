use super::*;

/// Tests existence check for a present room.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_meeting_room(db).await?;

    let repo = MeetingRoomRepository::new(db);
    assert!(repo.exists(room.id).await?);

    Ok(())
}

/// Tests existence check for a missing room.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeetingRoomRepository::new(db);
    assert!(!repo.exists(99999).await?);

    Ok(())
}

/// Tests name-based existence check.
///
/// Expected: Ok(true) for a taken name, Ok(false) otherwise
#[tokio::test]
async fn checks_existence_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::meeting_room::MeetingRoomFactory::new(db)
        .name("Fishbowl")
        .build()
        .await?;

    let repo = MeetingRoomRepository::new(db);
    assert!(repo.exists_by_name("Fishbowl").await?);
    assert!(!repo.exists_by_name("Atrium").await?);

    Ok(())
}
