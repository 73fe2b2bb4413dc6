//! Roomboard Test Utils
//!
//! Shared testing utilities for the roomboard backend. Provides a builder
//! pattern for creating test contexts with in-memory SQLite databases and
//! factories for seeding users, meeting rooms, and reservations.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_reservation_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_reservation_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
