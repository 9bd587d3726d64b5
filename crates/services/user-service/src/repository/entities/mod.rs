//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod user_info;

pub use user_info::{
    ActiveModel as UserInfoActiveModel, Entity as UserInfoEntity, Model as UserInfoModel,
};
