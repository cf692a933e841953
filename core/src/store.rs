//! Key-value persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! The ledger persists itself through the LedgerStore port — it
//! never executes SQL directly, and nothing else writes its key.

use crate::error::DashResult;
use rusqlite::{params, Connection};
use std::cell::RefCell;
use std::collections::HashMap;

/// The persistence capability the ledger requires: a string
/// key-value store with atomic single-key reads and writes.
pub trait LedgerStore {
    fn get(&self, key: &str) -> DashResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> DashResult<()>;
    fn delete(&self, key: &str) -> DashResult<()>;
}

// A shared handle works anywhere an owned store does. Lets a
// caller keep inspecting the store after handing it to a ledger.
impl<S: LedgerStore> LedgerStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> DashResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> DashResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> DashResult<()> {
        (**self).delete(key)
    }
}

/// SQLite-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store database at `path`.
    pub fn open(path: &str) -> DashResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DashResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply the schema. Idempotent.
    pub fn migrate(&self) -> DashResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS ledger_kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl LedgerStore for SqliteStore {
    fn get(&self, key: &str) -> DashResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM ledger_kv WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .ok();
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> DashResult<()> {
        self.conn.execute(
            "INSERT INTO ledger_kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> DashResult<()> {
        self.conn
            .execute("DELETE FROM ledger_kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
/// Single-threaded by design, like everything else here.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn get(&self, key: &str) -> DashResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> DashResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> DashResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_put_get_delete() {
        let store = SqliteStore::in_memory().expect("in-memory store");
        store.migrate().expect("migrate");

        assert_eq!(store.get("k").unwrap(), None);
        store.put("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v1".to_string()));
        store.put("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn migrate_is_idempotent() {
        let store = SqliteStore::in_memory().expect("in-memory store");
        store.migrate().expect("first migrate");
        store.migrate().expect("second migrate");
    }
}
