//! Storage failure propagation tests.
//!
//! These tests use SeaORM's mock connection to script what the backing
//! store returns, without requiring an actual database.

use std::sync::Arc;

use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

use common::AppError;
use user_service_lib::repository::entities::user_info;
use user_service_lib::{UserInfoRepository, UserInfoStore};

fn model(id: &str, user_id: &str) -> user_info::Model {
    user_info::Model {
        id: id.to_string(),
        user_id: user_id.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone_number: None,
        email: None,
        profile_pic: None,
    }
}

fn connection_refused() -> DbErr {
    DbErr::Conn(RuntimeErr::Internal("connection refused".to_string()))
}

#[tokio::test]
async fn test_find_by_id_surfaces_storage_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([connection_refused()])
        .into_connection();
    let store = UserInfoStore::new(db);

    let err = store.find_by_id("1").await.unwrap_err();
    assert!(matches!(err, AppError::Storage(DbErr::Conn(_))), "unexpected error: {:?}", err);
    assert_eq!(err.code(), "STORAGE_ERROR");
}

#[tokio::test]
async fn test_delete_by_id_surfaces_storage_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors([connection_refused()])
        .into_connection();
    let store = UserInfoStore::new(db);

    let err = store.delete_by_id("1").await.unwrap_err();
    assert!(err.is_storage());
}

#[tokio::test]
async fn test_delete_missing_row_is_not_an_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let store = UserInfoStore::new(db);

    assert!(store.delete_by_id("missing").await.is_ok());
}

#[tokio::test]
async fn test_find_by_user_id_single_match() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("1", "alice")]])
        .into_connection();
    let store = UserInfoStore::new(db);

    let found = store.find_by_user_id("alice").await.unwrap().unwrap();
    assert_eq!(found.id, "1");
}

#[tokio::test]
async fn test_find_by_user_id_multiple_matches_is_conflict() {
    // Only reachable on a schema without the unique index
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("1", "alice"), model("2", "alice")]])
        .into_connection();
    let store = UserInfoStore::new(db);

    let err = store.find_by_user_id("alice").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref msg) if msg.contains("alice")));
}

#[tokio::test]
async fn test_cloned_store_shares_mock_connection() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("1", "alice")]])
        .into_connection();
    let store = UserInfoStore::new(Arc::new(db));
    let cloned = store.clone();

    // The single scripted result is consumed through the clone
    let found = cloned.find_by_id("1").await.unwrap();
    assert_eq!(found.map(|r| r.user_id), Some("alice".to_string()));
}
