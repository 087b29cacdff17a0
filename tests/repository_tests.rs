//! Repository-level tests covering the semantics both backends must
//! share: descending id ordering, roll uniqueness, and the distinction
//! between "row absent" and a store fault.

use studentdesk::db::{
    LocalRepository, NewStudent, RepositoryError, SqliteRepository, StudentRepository,
};

fn new_student(name: &str, roll: &str) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        roll: roll.to_string(),
        grade: None,
        phone: None,
    }
}

async fn check_list_orders_newest_first(repo: &dyn StudentRepository) {
    for (name, roll) in [("Alice", "R1"), ("Bob", "R2"), ("Carol", "R3")] {
        repo.insert(new_student(name, roll)).await.unwrap();
    }

    let students = repo.list().await.unwrap();
    assert_eq!(students.len(), 3);
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted, "list must be ordered by id descending");
    assert_eq!(students[0].name, "Carol");
}

async fn check_duplicate_roll_conflicts(repo: &dyn StudentRepository) {
    repo.insert(new_student("Alice", "R1")).await.unwrap();

    let err = repo
        .insert(new_student("Bob", "R1"))
        .await
        .expect_err("second insert with the same roll must fail");
    assert!(matches!(err, RepositoryError::Conflict));

    // The failed write must not be partially applied.
    let students = repo.list().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alice");
}

async fn check_missing_id_is_not_found(repo: &dyn StudentRepository) {
    assert!(matches!(
        repo.get(999).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update(999, new_student("Ghost", "R999")).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete(999).await,
        Err(RepositoryError::NotFound)
    ));
}

async fn check_update_replaces_all_fields(repo: &dyn StudentRepository) {
    let id = repo
        .insert(NewStudent {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            roll: "R1".to_string(),
            grade: Some("B".to_string()),
            phone: Some("555-0100".to_string()),
        })
        .await
        .unwrap();

    repo.update(
        id,
        NewStudent {
            name: "Alicia".to_string(),
            email: "alicia@x.com".to_string(),
            roll: "R1-b".to_string(),
            grade: None,
            phone: Some("555-0199".to_string()),
        },
    )
    .await
    .unwrap();

    let student = repo.get(id).await.unwrap();
    assert_eq!(student.name, "Alicia");
    assert_eq!(student.email, "alicia@x.com");
    assert_eq!(student.roll, "R1-b");
    assert_eq!(student.grade, None);
    assert_eq!(student.phone.as_deref(), Some("555-0199"));
}

async fn check_update_roll_collision(repo: &dyn StudentRepository) {
    let first = repo.insert(new_student("Alice", "R1")).await.unwrap();
    let second = repo.insert(new_student("Bob", "R2")).await.unwrap();

    // Taking another row's roll is a conflict.
    let err = repo
        .update(second, new_student("Bob", "R1"))
        .await
        .expect_err("update stealing an existing roll must fail");
    assert!(matches!(err, RepositoryError::Conflict));

    // Keeping your own roll is not.
    repo.update(first, new_student("Alice", "R1")).await.unwrap();
}

async fn check_update_missing_id_with_taken_roll(repo: &dyn StudentRepository) {
    repo.insert(new_student("Alice", "R1")).await.unwrap();

    // Row absence must win over the roll collision: an UPDATE on a
    // missing row trips no constraint.
    let err = repo
        .update(999, new_student("Ghost", "R1"))
        .await
        .expect_err("update of a missing row must fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

async fn check_delete_removes_row(repo: &dyn StudentRepository) {
    let id = repo.insert(new_student("Alice", "R1")).await.unwrap();
    repo.delete(id).await.unwrap();
    assert!(matches!(repo.get(id).await, Err(RepositoryError::NotFound)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

async fn check_count_tracks_rows(repo: &dyn StudentRepository) {
    assert_eq!(repo.count().await.unwrap(), 0);
    repo.insert(new_student("Alice", "R1")).await.unwrap();
    repo.insert(new_student("Bob", "R2")).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);
}

macro_rules! backend_tests {
    ($backend:ident, $make:expr) => {
        mod $backend {
            use super::*;

            #[tokio::test]
            async fn test_list_orders_newest_first() {
                check_list_orders_newest_first(&$make).await;
            }

            #[tokio::test]
            async fn test_duplicate_roll_conflicts() {
                check_duplicate_roll_conflicts(&$make).await;
            }

            #[tokio::test]
            async fn test_missing_id_is_not_found() {
                check_missing_id_is_not_found(&$make).await;
            }

            #[tokio::test]
            async fn test_update_replaces_all_fields() {
                check_update_replaces_all_fields(&$make).await;
            }

            #[tokio::test]
            async fn test_update_roll_collision() {
                check_update_roll_collision(&$make).await;
            }

            #[tokio::test]
            async fn test_update_missing_id_with_taken_roll() {
                check_update_missing_id_with_taken_roll(&$make).await;
            }

            #[tokio::test]
            async fn test_delete_removes_row() {
                check_delete_removes_row(&$make).await;
            }

            #[tokio::test]
            async fn test_count_tracks_rows() {
                check_count_tracks_rows(&$make).await;
            }
        }
    };
}

backend_tests!(sqlite, SqliteRepository::open_in_memory().unwrap());
backend_tests!(local, LocalRepository::new());

#[tokio::test]
async fn test_sqlite_insert_populates_created_at() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let id = repo.insert(new_student("Alice", "R1")).await.unwrap();

    let student = repo.get(id).await.unwrap();
    assert!(student.created_at.is_some());
}

#[tokio::test]
async fn test_sqlite_update_keeps_created_at() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let id = repo.insert(new_student("Alice", "R1")).await.unwrap();
    let before = repo.get(id).await.unwrap().created_at;

    repo.update(id, new_student("Alicia", "R1")).await.unwrap();
    let after = repo.get(id).await.unwrap().created_at;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_sqlite_schema_init_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    let id = {
        let repo = SqliteRepository::open(&path).unwrap();
        repo.insert(new_student("Alice", "R1")).await.unwrap()
    };

    // Reopening runs schema creation again and must not touch the data.
    let repo = SqliteRepository::open(&path).unwrap();
    let student = repo.get(id).await.unwrap();
    assert_eq!(student.name, "Alice");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_sqlite_open_creates_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("students.db");

    let repo = SqliteRepository::open(&path).unwrap();
    repo.insert(new_student("Alice", "R1")).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_sqlite_ids_are_not_reused_after_delete() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let first = repo.insert(new_student("Alice", "R1")).await.unwrap();
    repo.delete(first).await.unwrap();

    let second = repo.insert(new_student("Bob", "R2")).await.unwrap();
    assert!(second > first);
}
