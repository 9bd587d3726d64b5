//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence lives in the user service; types here are what callers see.

pub mod constants;
pub mod error;
pub mod user_info;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user_info::UserInfo;
