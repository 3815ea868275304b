use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Product id to free-text quantity ("10 kg", "3 cx"). The text is opaque;
/// no numeric or unit validation happens anywhere.
pub type QuantityMap = BTreeMap<String, String>;

/// The quantity snapshot being worked on for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySheet {
    pub date_key: String,
    pub quantities: QuantityMap,
}

impl DaySheet {
    pub fn empty_for(date_key: &str) -> Self {
        Self {
            date_key: date_key.to_string(),
            quantities: QuantityMap::new(),
        }
    }

    pub fn set_quantity(&mut self, product_id: &str, text: &str) {
        self.quantities
            .insert(product_id.to_string(), text.to_string());
    }

    pub fn quantity(&self, product_id: &str) -> &str {
        self.quantities
            .get(product_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Moves the sheet to a new day, carrying the quantities forward as the
    /// day's opening stock. Returns whether the date key changed.
    pub fn rollover(&mut self, today: &str) -> bool {
        if self.date_key == today {
            return false;
        }
        self.date_key = today.to_string();
        true
    }
}

pub fn today_date_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
