//! Migration: Create user_info table with a unique user_id lookup key.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserInfo::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserInfo::UserId).string().not_null())
                    .col(ColumnDef::new(UserInfo::FirstName).string().not_null())
                    .col(ColumnDef::new(UserInfo::LastName).string().not_null())
                    .col(ColumnDef::new(UserInfo::PhoneNumber).string().null())
                    .col(ColumnDef::new(UserInfo::Email).string().null())
                    .col(ColumnDef::new(UserInfo::ProfilePic).string().null())
                    .to_owned(),
            )
            .await?;

        // user_id is a lookup key; at most one record may carry it
        manager
            .create_index(
                Index::create()
                    .name("idx_user_info_user_id")
                    .table(UserInfo::Table)
                    .col(UserInfo::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_info_user_id")
                    .table(UserInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserInfo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserInfo {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    ProfilePic,
}
