//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key dependencies, keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::meeting_room::create_meeting_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, room, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("boss@example.com")
//!     .superuser(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod meeting_room;
pub mod reservation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use meeting_room::create_meeting_room;
pub use reservation::create_reservation;
pub use user::create_user;
