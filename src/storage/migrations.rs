//! Database migrations for taskhint.
//!
//! Migrations are run automatically when the database is opened. The schema
//! version is tracked in `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::TaskhintError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, TaskhintError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TaskhintError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), TaskhintError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TaskhintError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), TaskhintError> {
    let current = get_version(conn)?;

    if current > CURRENT_VERSION {
        return Err(TaskhintError::Database(format!(
            "Database schema v{current} is newer than this build (v{CURRENT_VERSION})"
        )));
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::info!("applying database migration v{version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), TaskhintError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TaskhintError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: lists (with the shared Inbox as id 1) and tasks.
fn migrate_v1(conn: &Connection) -> Result<(), TaskhintError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            owner TEXT
        );

        INSERT OR IGNORE INTO lists (id, name, owner) VALUES (1, 'Inbox', NULL);

        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            due_date TEXT NOT NULL,
            time TEXT NOT NULL DEFAULT '00:00',
            priority TEXT NOT NULL DEFAULT 'No Priority',
            status TEXT NOT NULL DEFAULT 'uncompleted',
            owner TEXT NOT NULL,
            list_id INTEGER NOT NULL REFERENCES lists(id)
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_owner
        ON tasks(owner, status);

        CREATE INDEX IF NOT EXISTS idx_tasks_list
        ON tasks(list_id);
        ",
    )
    .map_err(|e| TaskhintError::Database(format!("Migration v1 failed: {e}")))
}
