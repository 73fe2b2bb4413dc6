mod meeting_room;
