//! Request guards and session wrappers shared by the controllers.

pub mod auth;
pub mod session;
