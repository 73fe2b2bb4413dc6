use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::SESSION_AUTH_USER_ID,
    model::user::User,
};

/// Permissions a controller can demand beyond being logged in.
pub enum Permission {
    Superuser,
}

/// Resolves the session to a database user and checks permissions.
///
/// Controllers call this at the top of each protected handler. Ownership
/// checks against a specific reservation happen in the service layer; this
/// guard only answers "who is calling and are they allowed here at all".
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding all of the given permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions to check; an empty list requires login only
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError)` - Not logged in, user deleted, or permission missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Superuser => {
                    if !user.superuser {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            reason: "endpoint requires superuser".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
