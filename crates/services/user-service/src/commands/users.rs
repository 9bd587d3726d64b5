//! Users command - thin wrappers over the record store that print JSON.

use serde::Serialize;
use serde_json::json;

use common::{AppError, AppResult};
use domain::clamp_page_size;

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{UserInfoRepository, UserInfoStore};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: UserServiceConfig) -> AppResult<()> {
    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let store = UserInfoStore::new(db.get_connection());

    let output = run(args.action, &store).await?;
    println!("{}", output);
    Ok(())
}

/// Run one action against a repository and render its result.
///
/// Absent records render as `null`; that is not a failure.
pub async fn run(action: UsersAction, repo: &dyn UserInfoRepository) -> AppResult<String> {
    match action {
        UsersAction::Get { id } => render(&repo.find_by_id(&id).await?),
        UsersAction::Find { user_id } => render(&repo.find_by_user_id(&user_id).await?),
        UsersAction::Exists { id } => render(&repo.exists_by_id(&id).await?),
        UsersAction::List { page: None, .. } => render(&repo.find_all().await?),
        UsersAction::List { page: Some(page), per_page } => {
            let (records, total) = repo.find_page(page, per_page).await?;
            render(&json!({
                "page": page.max(1),
                "per_page": clamp_page_size(per_page),
                "total": total,
                "records": records,
            }))
        }
        UsersAction::Count => render(&repo.count().await?),
        UsersAction::Save(args) => {
            let saved = repo.save(args.into()).await?;
            tracing::info!(id = %saved.id, user_id = %saved.user_id, "User record saved");
            render(&saved)
        }
        UsersAction::Delete { id } => {
            repo.delete_by_id(&id).await?;
            tracing::info!(id = %id, "User record deleted");
            render(&json!({ "deleted": id }))
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))
}
