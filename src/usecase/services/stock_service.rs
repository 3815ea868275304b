use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::catalog::{Catalog, Category, Product};
use crate::domain::entities::day_sheet::DaySheet;
use crate::infra::import::import_catalog;
use crate::usecase::ports::store::{StateStore, StoreError};

/// Application state controller: every user action goes through here and is
/// persisted before it returns. The UI owns the in-memory catalog and sheet;
/// this service keeps the store in step with them.
pub struct StockService {
    store: Arc<dyn StateStore>,
}

impl StockService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub fn init(&self) -> Result<(), StoreError> {
        self.store.init()
    }

    /// Loads persisted state. Missing or unparsable entries fall back to
    /// defaults so a broken store never blocks the user.
    pub fn load_or_default(&self, today: &str) -> Result<(Catalog, DaySheet), StoreError> {
        let catalog = self.store.load_catalog()?.unwrap_or_default();
        let sheet = self
            .store
            .load_day_sheet()?
            .unwrap_or_else(|| DaySheet::empty_for(today));
        Ok((catalog, sheet))
    }

    /// Moves the sheet to `today`, keeping quantities as the day's opening
    /// stock. Persists only when the date actually changed.
    pub fn rollover_if_needed(
        &self,
        sheet: &mut DaySheet,
        today: &str,
    ) -> Result<bool, StoreError> {
        if !sheet.rollover(today) {
            return Ok(false);
        }
        self.store.save_day_sheet(sheet)?;
        Ok(true)
    }

    pub fn set_quantity(
        &self,
        sheet: &mut DaySheet,
        product_id: &str,
        text: &str,
    ) -> Result<(), StoreError> {
        sheet.set_quantity(product_id, text);
        self.store.save_day_sheet(sheet)
    }

    pub fn clear_all(&self, sheet: &mut DaySheet, today: &str) -> Result<(), StoreError> {
        *sheet = DaySheet::empty_for(today);
        self.store.save_day_sheet(sheet)
    }

    /// Replaces the catalog wholesale. A file that fails to parse leaves the
    /// stored catalog and quantities exactly as they were. Quantities keyed
    /// by ids that survive the re-import keep working; ids that disappeared
    /// stay in the map untouched.
    pub fn import_catalog(&self, bytes: &[u8], fallback_name: &str) -> Result<Catalog> {
        let catalog = import_catalog(bytes, fallback_name)?;
        self.store
            .save_catalog(&catalog)
            .context("failed to persist imported catalog")?;
        Ok(catalog)
    }
}

/// Case-insensitive substring filter over the active category's products.
/// Pure display concern; an empty search shows the whole category.
pub fn filter_products<'a>(category: Option<&'a Category>, search: &str) -> Vec<&'a Product> {
    let Some(category) = category else {
        return Vec::new();
    };
    let needle = search.trim().to_lowercase();
    category
        .products
        .iter()
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .collect()
}
