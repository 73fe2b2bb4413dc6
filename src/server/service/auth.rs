use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
    },
};

/// Service handling registration and credential verification.
///
/// Passwords are stored as Argon2 hashes. Session handling stays in the
/// controller; this service only answers "who is this".
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with the given credentials.
    ///
    /// New users are never superusers; that flag is set out of band.
    ///
    /// # Arguments
    /// - `dto` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The registered user
    /// - `Err(AppError)` - Taken email, hashing failure, or database error
    pub async fn register(&self, dto: RegisterDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_entity_by_email(&dto.email).await?.is_some() {
            return Err(AuthError::EmailTaken(dto.email).into());
        }

        let password_hash = Self::hash_password(&dto.password)?;

        let user = repo
            .create(CreateUserParams {
                email: dto.email,
                password_hash,
                superuser: false,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(user.into_dto())
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which was wrong.
    ///
    /// # Arguments
    /// - `dto` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The authenticated user
    /// - `Err(AppError)` - Invalid credentials or database error
    pub async fn login(&self, dto: LoginDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let entity = repo
            .find_entity_by_email(&dto.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Self::verify_password(&dto.password, &entity.password_hash)?;

        Ok(User::from_entity(entity).into_dto())
    }

    /// Hashes a plaintext password with Argon2 and a fresh random salt.
    fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2 hash.
    ///
    /// An unparsable stored hash reports as invalid credentials rather than
    /// an internal error; the row is unusable either way.
    fn verify_password(password: &str, stored_hash: &str) -> Result<(), AppError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}
