//! SQLite-backed record store.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{Connection, params};
use trailforward_core::event::parse_event_date;
use trailforward_core::store::RecordStore;
use trailforward_core::{CoreError, CoreResult, EventRecord, NewEvent};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    date TEXT NOT NULL,
    location TEXT NOT NULL
)";

/// Event table in a single SQLite connection.
///
/// Queries run on the blocking pool so they never stall the runtime.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

fn store_err(e: impl std::fmt::Display) -> CoreError {
    CoreError::Store(e.to_string())
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema.
    pub fn open(path: &Path) -> CoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path).map_err(store_err)?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> CoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(store_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> CoreResult<Self> {
        conn.execute(SCHEMA, []).map_err(store_err)?;
        Ok(SqliteStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Close the connection if this is the last handle to it.
    pub fn close(self) -> CoreResult<()> {
        let Ok(mutex) = Arc::try_unwrap(self.conn) else {
            return Err(CoreError::Store("Database still in use".into()));
        };
        let conn = mutex.into_inner().map_err(store_err)?;
        conn.close().map_err(|(_, e)| store_err(e))
    }

    async fn with_conn<F, T>(&self, func: F) -> CoreResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(store_err)?;
            func(&conn).map_err(store_err)
        })
        .await
        .map_err(store_err)?
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list(&self) -> CoreResult<Vec<EventRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, date, location FROM events ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                let raw: String = row.get(2)?;
                let date = parse_event_date(&raw)
                    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
                Ok(EventRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    date,
                    location: row.get(3)?,
                })
            })?;
            rows.collect()
        })
        .await
    }

    async fn create(&self, event: &NewEvent) -> CoreResult<()> {
        let event = event.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO events (name, date, location) VALUES (?1, ?2, ?3)",
                params![event.name, event.date.to_rfc3339(), event.location],
            )
        })
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        let affected = self
            .with_conn(move |conn| conn.execute("DELETE FROM events WHERE id = ?1", params![id]))
            .await?;

        if affected == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_event(name: &str, year: i32) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            date: Utc.with_ymd_and_hms(year, 5, 1, 18, 30, 0).unwrap(),
            location: "Grange hall".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_assigns_ids() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create(&new_event("Potluck", 2030)).await.unwrap();
        store.create(&new_event("Clean-up", 2019)).await.unwrap();

        let records = store.list().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "Potluck");
        assert_eq!(records[0].date, Utc.with_ymd_and_hms(2030, 5, 1, 18, 30, 0).unwrap());
        assert_eq!(records[1].id, 2);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_ids() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create(&new_event("Potluck", 2030)).await.unwrap();

        store.delete(1).await.unwrap();
        assert!(matches!(store.delete(1).await, Err(CoreError::NotFound(1))));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reads_sql_datetime_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .with_conn(|conn| {
                conn.execute(
                    "INSERT INTO events (name, date, location) VALUES ('Legacy', '2021-07-04 12:00:00', 'Square')",
                    [],
                )
            })
            .await
            .unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records[0].date, Utc.with_ymd_and_hms(2021, 7, 4, 12, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn test_open_creates_file_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("events.db");

        let store = SqliteStore::open(&path).unwrap();
        store.create(&new_event("Potluck", 2030)).await.unwrap();
        store.close().unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }
}
