pub mod schema;

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

use crate::error::PlanResult;

/// Open (or create) the meal database at the given path. The schema is not
/// touched; see [`schema::init_schema`].
pub fn open_database(path: impl AsRef<Path>) -> PlanResult<Connection> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(path)?;
    conn.busy_timeout(Duration::from_millis(5000))?;

    tracing::trace!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Open an in-memory database with the schema applied, for tests.
#[cfg(test)]
pub fn open_memory_database() -> PlanResult<Connection> {
    let conn = Connection::open_in_memory()?;
    schema::init_schema(&conn)?;
    Ok(conn)
}
