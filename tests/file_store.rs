//! Directory-backed storage: persistence across reopen and the on-disk
//! record format.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

#[path = "test_helpers/clock.rs"]
mod clock;

use std::sync::Arc;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use rstest::{fixture, rstest};
use taskboard::config::AppConfig;
use taskboard::task::{
    adapters::{file::FileKeyValueStore, key_value::KeyValueTaskRepository},
    domain::{CreateTaskRequest, TaskFilter, UpdateTaskRequest},
    ports::{KeyValueStore, StorageError},
    services::TaskService,
};
use tempfile::TempDir;
use clock::TickingClock;

#[fixture]
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("temporary directory")
}

fn open_store(dir: &TempDir) -> FileKeyValueStore {
    let path = Utf8Path::from_path(dir.path()).expect("temporary path is UTF-8");
    FileKeyValueStore::open(&path.join("store")).expect("store opens")
}

fn open_service(
    dir: &TempDir,
) -> TaskService<KeyValueTaskRepository<FileKeyValueStore, TickingClock>> {
    let repository = KeyValueTaskRepository::from_config(
        open_store(dir),
        &AppConfig::default(),
        Arc::new(TickingClock::new()),
    );
    TaskService::new(Arc::new(repository))
}

#[rstest]
fn missing_key_reads_as_none(temp_dir: TempDir) {
    let store = open_store(&temp_dir);

    assert_eq!(store.get("todo-app-todos").expect("read succeeds"), None);
}

#[rstest]
fn set_get_remove_cycle(temp_dir: TempDir) {
    let store = open_store(&temp_dir);

    store.set("notes", "[1,2,3]").expect("write succeeds");
    assert_eq!(
        store.get("notes").expect("read succeeds").as_deref(),
        Some("[1,2,3]")
    );
    assert!(temp_dir.path().join("store").join("notes.json").is_file());

    store.remove("notes").expect("remove succeeds");
    store.remove("notes").expect("second remove is a no-op");
    assert_eq!(store.get("notes").expect("read succeeds"), None);
}

#[rstest]
fn store_over_an_opened_directory_shares_its_files(temp_dir: TempDir) {
    let path = Utf8Path::from_path(temp_dir.path()).expect("temporary path is UTF-8");
    let dir = Dir::open_ambient_dir(path, ambient_authority()).expect("directory opens");
    let store = FileKeyValueStore::from_dir(dir);

    store.set("shared", "[]").expect("write succeeds");

    let reopened = FileKeyValueStore::open(path).expect("store opens");
    assert_eq!(
        reopened.get("shared").expect("read succeeds").as_deref(),
        Some("[]")
    );
}

#[rstest]
#[case("")]
#[case("..")]
#[case("nested/key")]
#[case("back\\slash")]
fn rejects_keys_that_escape_the_directory(temp_dir: TempDir, #[case] key: &str) {
    let store = open_store(&temp_dir);

    assert!(matches!(store.set(key, "x"), Err(StorageError::InvalidKey(_))));
    assert!(matches!(store.get(key), Err(StorageError::InvalidKey(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_survive_reopening_the_store(temp_dir: TempDir) {
    let created = {
        let service = open_service(&temp_dir);
        let task = service
            .create_task(
                CreateTaskRequest::new("Renew passport")
                    .with_priority("high")
                    .with_category("admin"),
            )
            .await
            .expect("task creation should succeed");
        service
            .update_task(
                task.id().as_str(),
                UpdateTaskRequest::new().with_completed(true),
            )
            .await
            .expect("valid update")
            .expect("task exists")
    };

    let reopened = open_service(&temp_dir);
    let found = reopened
        .get_task_by_id(created.id().as_str())
        .await
        .expect("id supplied");

    assert_eq!(found, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn on_disk_format_is_a_json_array_of_records(temp_dir: TempDir) {
    let service = open_service(&temp_dir);
    service
        .create_task(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("task creation should succeed");

    let raw = std::fs::read_to_string(temp_dir.path().join("store").join("todo-app-todos.json"))
        .expect("collection file exists");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("valid JSON array");

    let record = records.first().expect("one record");
    assert_eq!(record["text"], "Buy milk");
    assert_eq!(record["priority"], "medium");
    assert_eq!(record["completed"], false);
    assert!(record["id"].is_string());
    assert!(record["createdAt"].is_string());
    assert_eq!(record["createdAt"], record["updatedAt"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_file_reads_as_empty_collection(temp_dir: TempDir) {
    let store = open_store(&temp_dir);
    store
        .set("todo-app-todos", "definitely not json")
        .expect("write succeeds");

    let service = open_service(&temp_dir);

    assert!(service.get_all_tasks(&TaskFilter::default()).await.is_empty());
}
