//! UserInfo repository: CRUD by primary key plus the `user_id` lookup.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use super::entities::user_info::{self, ActiveModel, Entity as UserInfoEntity};
use common::{AppError, AppResult};
use domain::{clamp_page_size, UserInfo};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// UserInfo repository trait for dependency injection.
///
/// Absence is reported as `None` (or skipped in batch reads), never as an
/// error. Deleting a missing record is a no-op.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserInfoRepository: Send + Sync {
    /// Insert the record, or overwrite every field if its id already exists.
    /// An empty id is replaced by a generated one.
    async fn save(&self, record: UserInfo) -> AppResult<UserInfo>;

    /// Save every record in one transaction
    async fn save_all(&self, records: Vec<UserInfo>) -> AppResult<Vec<UserInfo>>;

    /// Find record by primary key
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserInfo>>;

    /// Find the record carrying `user_id`; more than one match is a `Conflict`
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserInfo>>;

    /// Check for a primary key without loading the record
    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// All records ordered by id
    async fn find_all(&self) -> AppResult<Vec<UserInfo>>;

    /// Records whose id is listed, ordered by id
    async fn find_all_by_id(&self, ids: &[String]) -> AppResult<Vec<UserInfo>>;

    /// One page (1-indexed) of records ordered by id, with the total count
    async fn find_page(&self, page: u64, per_page: u64) -> AppResult<(Vec<UserInfo>, u64)>;

    /// Number of stored records
    async fn count(&self) -> AppResult<u64>;

    /// Delete record by primary key
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;

    /// Delete the stored record with this record's primary key
    async fn delete(&self, record: &UserInfo) -> AppResult<()>;

    /// Delete the listed ids, returning how many rows were removed
    async fn delete_all_by_id(&self, ids: &[String]) -> AppResult<u64>;

    /// Delete every record, returning how many rows were removed
    async fn delete_all(&self) -> AppResult<u64>;
}

/// SeaORM-backed implementation of UserInfoRepository
#[derive(Clone, Debug)]
pub struct UserInfoStore {
    db: Arc<DatabaseConnection>,
}

impl UserInfoStore {
    /// Create new repository instance over an owned or shared connection
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

/// Insert-or-update on any connection, so `save` and `save_all` share it
/// inside their transactions.
async fn upsert<C: ConnectionTrait>(conn: &C, mut record: UserInfo) -> AppResult<UserInfo> {
    record.ensure_valid()?;

    if record.needs_id() {
        record.id = Uuid::new_v4().to_string();
    }

    let exists = UserInfoEntity::find_by_id(record.id.as_str()).count(conn).await? > 0;
    // Either unique key can collide, so name both
    let what = format!("User record '{}' (user id '{}')", record.id, record.user_id);
    let active: ActiveModel = record.into();

    let written = if exists {
        active.update(conn).await
    } else {
        active.insert(conn).await
    };
    let model = written.map_err(|e| AppError::from_write(e, &what))?;

    tracing::debug!(id = %model.id, updated = exists, "Saved user record");
    Ok(UserInfo::from(model))
}

#[async_trait]
impl UserInfoRepository for UserInfoStore {
    async fn save(&self, record: UserInfo) -> AppResult<UserInfo> {
        let txn = self.db.begin().await?;
        let saved = upsert(&txn, record).await?;
        txn.commit().await?;
        Ok(saved)
    }

    async fn save_all(&self, records: Vec<UserInfo>) -> AppResult<Vec<UserInfo>> {
        // Dropping the transaction on an early return rolls everything back
        let txn = self.db.begin().await?;
        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            saved.push(upsert(&txn, record).await?);
        }
        txn.commit().await?;

        tracing::debug!(count = saved.len(), "Saved user records");
        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserInfo>> {
        tracing::debug!(id, "Finding user record by id");
        let result = UserInfoEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserInfo::from))
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserInfo>> {
        tracing::debug!(user_id, "Finding user record by user id");
        // Two rows are enough to detect an ambiguous key
        let mut models = UserInfoEntity::find()
            .filter(user_info::Column::UserId.eq(user_id))
            .limit(2u64)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if models.len() > 1 {
            return Err(AppError::conflict(format!(
                "Multiple user records share user id '{}'",
                user_id
            )));
        }

        Ok(models.pop().map(UserInfo::from))
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let count = UserInfoEntity::find_by_id(id)
            .count(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn find_all(&self) -> AppResult<Vec<UserInfo>> {
        let models = UserInfoEntity::find()
            .order_by_asc(user_info::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserInfo::from).collect())
    }

    async fn find_all_by_id(&self, ids: &[String]) -> AppResult<Vec<UserInfo>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = UserInfoEntity::find()
            .filter(user_info::Column::Id.is_in(ids.iter().cloned()))
            .order_by_asc(user_info::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserInfo::from).collect())
    }

    async fn find_page(&self, page: u64, per_page: u64) -> AppResult<(Vec<UserInfo>, u64)> {
        let paginator = UserInfoEntity::find()
            .order_by_asc(user_info::Column::Id)
            .paginate(self.db.as_ref(), clamp_page_size(per_page));
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(UserInfo::from).collect(), total))
    }

    async fn count(&self) -> AppResult<u64> {
        UserInfoEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let result = UserInfoEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        tracing::debug!(id, removed = result.rows_affected, "Deleted user record");
        Ok(())
    }

    async fn delete(&self, record: &UserInfo) -> AppResult<()> {
        self.delete_by_id(&record.id).await
    }

    async fn delete_all_by_id(&self, ids: &[String]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = UserInfoEntity::delete_many()
            .filter(user_info::Column::Id.is_in(ids.iter().cloned()))
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = UserInfoEntity::delete_many()
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        tracing::debug!(removed = result.rows_affected, "Deleted all user records");
        Ok(result.rows_affected)
    }
}
