use sea_orm::DatabaseConnection;

use crate::{
    model::meeting_room::{CreateMeetingRoomDto, MeetingRoomDto},
    server::{
        data::meeting_room::MeetingRoomRepository,
        error::{auth::AuthError, AppError},
        model::{
            meeting_room::{CreateMeetingRoomParams, MeetingRoom},
            user::User,
        },
    },
};

/// Service handling meeting room administration and listing.
pub struct MeetingRoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingRoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meeting room. Superuser only.
    ///
    /// # Arguments
    /// - `user` - Authenticated user; must be a superuser
    /// - `dto` - Name and optional description
    ///
    /// # Returns
    /// - `Ok(MeetingRoomDto)` - The created room
    /// - `Err(AppError)` - Forbidden, duplicate name, or database error
    pub async fn create(
        &self,
        user: &User,
        dto: CreateMeetingRoomDto,
    ) -> Result<MeetingRoomDto, AppError> {
        if !user.superuser {
            return Err(AuthError::AccessDenied {
                user_id: user.id,
                reason: "creating meeting rooms requires superuser".to_string(),
            }
            .into());
        }

        let repo = MeetingRoomRepository::new(self.db);

        if repo.exists_by_name(&dto.name).await? {
            return Err(AppError::BadRequest(format!(
                "Meeting room '{}' already exists",
                dto.name
            )));
        }

        let created = repo
            .create(CreateMeetingRoomParams {
                name: dto.name,
                description: dto.description,
            })
            .await?;

        tracing::info!(
            meeting_room_id = created.id,
            user_id = user.id,
            "Meeting room created"
        );

        Ok(created.into_dto())
    }

    /// Lists all rooms, ordered by name. Public.
    pub async fn get_all(&self) -> Result<Vec<MeetingRoomDto>, AppError> {
        let repo = MeetingRoomRepository::new(self.db);
        let rooms = repo.get_all().await?;

        Ok(rooms.into_iter().map(MeetingRoom::into_dto).collect())
    }
}
