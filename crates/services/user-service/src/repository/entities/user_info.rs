//! UserInfo database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::UserInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for UserInfo {
    fn from(model: Model) -> Self {
        UserInfo {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            email: model.email,
            profile_pic: model.profile_pic,
        }
    }
}

/// Every column set, so the same model serves insert and full update
impl From<UserInfo> for ActiveModel {
    fn from(record: UserInfo) -> Self {
        ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            phone_number: Set(record.phone_number),
            email: Set(record.email),
            profile_pic: Set(record.profile_pic),
        }
    }
}
