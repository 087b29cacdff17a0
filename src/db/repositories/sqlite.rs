//! SQLite-backed repository implementation.
//!
//! The connection is opened once at startup and shared for the lifetime
//! of the process behind a mutex; every operation is a single SQL
//! statement executed on the blocking thread pool. Schema creation is
//! idempotent, so it runs on every startup.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::db::models::{NewStudent, Student};
use crate::db::repository::{RepositoryError, RepositoryResult, StudentRepository};

/// Idempotent schema for the single `students` table. `roll` carries the
/// uniqueness constraint; `id` and `created_at` are store-assigned.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    roll TEXT NOT NULL UNIQUE,
    grade TEXT,
    phone TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// On-disk student store.
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Open (or create) the database file and ensure the schema exists.
    ///
    /// The parent directory is created if missing so the database file
    /// can live under a mounted data directory. Any failure here is
    /// fatal to startup; there is no recovery path.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    RepositoryError::Store(format!(
                        "failed to create data directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path).map_err(map_sqlite_err)?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database, mainly for tests.
    pub fn open_in_memory() -> RepositoryResult<Self> {
        let conn = Connection::open_in_memory().map_err(map_sqlite_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> RepositoryResult<Self> {
        conn.execute_batch(SCHEMA).map_err(map_sqlite_err)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the shared connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> RepositoryResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await
        .map_err(|e| RepositoryError::Store(format!("task join error: {}", e)))?
    }
}

/// Translate driver errors into the repository's typed error set.
///
/// A constraint violation can only come from the UNIQUE index on `roll`
/// (the remaining columns have no constraints a parameterized statement
/// can trip), so it maps to `Conflict` without sniffing message text.
fn map_sqlite_err(err: rusqlite::Error) -> RepositoryError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            RepositoryError::Conflict
        }
        other => RepositoryError::Store(other.to_string()),
    }
}

fn map_student_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        roll: row.get(3)?,
        grade: row.get(4)?,
        phone: row.get(5)?,
        created_at: row.get(6)?,
    })
}

const STUDENT_COLUMNS: &str = "id, name, email, roll, grade, phone, created_at";

#[async_trait]
impl StudentRepository for SqliteRepository {
    async fn list(&self) -> RepositoryResult<Vec<Student>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {} FROM students ORDER BY id DESC",
                    STUDENT_COLUMNS
                ))
                .map_err(map_sqlite_err)?;
            let rows = stmt
                .query_map([], map_student_row)
                .map_err(map_sqlite_err)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sqlite_err)?;
            Ok(rows)
        })
        .await
    }

    async fn get(&self, id: i64) -> RepositoryResult<Student> {
        self.with_conn(move |conn| {
            conn.query_row(
                &format!("SELECT {} FROM students WHERE id = ?1", STUDENT_COLUMNS),
                params![id],
                map_student_row,
            )
            .optional()
            .map_err(map_sqlite_err)?
            .ok_or(RepositoryError::NotFound)
        })
        .await
    }

    async fn insert(&self, new: NewStudent) -> RepositoryResult<i64> {
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO students(name, email, roll, grade, phone) VALUES(?1, ?2, ?3, ?4, ?5)",
                params![new.name, new.email, new.roll, new.grade, new.phone],
            )
            .map_err(map_sqlite_err)?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn update(&self, id: i64, new: NewStudent) -> RepositoryResult<()> {
        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE students SET name = ?1, email = ?2, roll = ?3, grade = ?4, phone = ?5 \
                     WHERE id = ?6",
                    params![new.name, new.email, new.roll, new.grade, new.phone, id],
                )
                .map_err(map_sqlite_err)?;
            // 0 rows affected is "row absent", not a store fault.
            if changed == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.with_conn(move |conn| {
            let changed = conn
                .execute("DELETE FROM students WHERE id = ?1", params![id])
                .map_err(map_sqlite_err)?;
            if changed == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
        .await
    }

    async fn count(&self) -> RepositoryResult<i64> {
        self.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
                .map_err(map_sqlite_err)
        })
        .await
    }
}
