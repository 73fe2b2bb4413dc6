use super::*;

/// Tests getting a room by id.
///
/// Expected: Ok with Some(room)
#[tokio::test]
async fn gets_room_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_meeting_room(db).await?;

    let repo = MeetingRoomRepository::new(db);
    let found = repo.get_by_id(room.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, room.id);
    assert_eq!(found.name, room.name);

    Ok(())
}

/// Tests getting a room that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeetingRoomRepository::new(db);
    let found = repo.get_by_id(99999).await?;

    assert!(found.is_none());

    Ok(())
}
