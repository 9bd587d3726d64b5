//! Repository layer for data access.

pub mod entities;
mod user_info_repository;

pub use user_info_repository::{UserInfoRepository, UserInfoStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_info_repository::MockUserInfoRepository;
