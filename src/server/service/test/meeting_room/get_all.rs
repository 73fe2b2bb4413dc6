use super::*;

/// Tests the public room listing.
///
/// Expected: Ok with all rooms
#[tokio::test]
async fn lists_all_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_meeting_room(db).await?;
    factory::create_meeting_room(db).await?;

    let service = MeetingRoomService::new(db);
    let all = service.get_all().await.unwrap();

    assert_eq!(all.len(), 2);

    Ok(())
}
