use std::path::PathBuf;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::day_sheet::DaySheet;
use crate::infra::store::schema::{init_db, open_connection};
use crate::usecase::ports::store::{StateStore, StoreError};

const CATALOG_KEY: &str = "catalog";
const DAY_SHEET_KEY: &str = "day_sheet";

pub struct SqliteStore {
    pub db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn read_value(&self, key: &str) -> Result<Option<String>> {
        let conn = open_connection(&self.db_path)?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .with_context(|| format!("failed to read key: {key}"))
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        let conn = open_connection(&self.db_path)?;
        conn.execute(
            "INSERT INTO kv(key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            params![key, value],
        )
        .with_context(|| format!("failed to write key: {key}"))?;
        Ok(())
    }
}

// Unparsable stored text is treated the same as a missing key.
fn try_deserialize<T: serde::de::DeserializeOwned>(text: Option<String>) -> Option<T> {
    text.and_then(|raw| serde_json::from_str(&raw).ok())
}

impl StateStore for SqliteStore {
    fn init(&self) -> Result<(), StoreError> {
        init_db(&self.db_path).map_err(|err| StoreError::Message(err.to_string()))
    }

    fn load_catalog(&self) -> Result<Option<Catalog>, StoreError> {
        let raw = self
            .read_value(CATALOG_KEY)
            .map_err(|err| StoreError::Message(err.to_string()))?;
        Ok(try_deserialize(raw))
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let text = serde_json::to_string(catalog)
            .map_err(|err| StoreError::Message(err.to_string()))?;
        self.write_value(CATALOG_KEY, &text)
            .map_err(|err| StoreError::Message(err.to_string()))
    }

    fn load_day_sheet(&self) -> Result<Option<DaySheet>, StoreError> {
        let raw = self
            .read_value(DAY_SHEET_KEY)
            .map_err(|err| StoreError::Message(err.to_string()))?;
        Ok(try_deserialize(raw))
    }

    fn save_day_sheet(&self, sheet: &DaySheet) -> Result<(), StoreError> {
        let text =
            serde_json::to_string(sheet).map_err(|err| StoreError::Message(err.to_string()))?;
        self.write_value(DAY_SHEET_KEY, &text)
            .map_err(|err| StoreError::Message(err.to_string()))
    }
}
