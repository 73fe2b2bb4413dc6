use crate::server::{
    data::meeting_room::MeetingRoomRepository, model::meeting_room::CreateMeetingRoomParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_by_id;
