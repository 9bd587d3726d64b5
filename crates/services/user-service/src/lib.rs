//! User Service Library
//!
//! Persistence gateway for `UserInfo` records: a SeaORM-backed repository
//! with primary-key CRUD and a lookup by `user_id`, plus the schema
//! migrations and an admin CLI around it.
//!
//! # CLI Usage
//!
//! ```bash
//! # Apply migrations
//! user-service migrate up
//!
//! # Look a record up by its user id
//! user-service users find alice
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;

pub use config::UserServiceConfig;
pub use infra::Database;
pub use repository::{UserInfoRepository, UserInfoStore};
