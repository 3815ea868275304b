use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::day_sheet::DaySheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Message(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Local key-value persistence for the catalog and the working day sheet.
/// Loads return `None` both for missing and for unparsable stored content; a
/// corrupted store must never block the user from working.
pub trait StateStore: Send + Sync {
    fn init(&self) -> Result<(), StoreError>;

    fn load_catalog(&self) -> Result<Option<Catalog>, StoreError>;
    fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError>;

    fn load_day_sheet(&self) -> Result<Option<DaySheet>, StoreError>;
    fn save_day_sheet(&self, sheet: &DaySheet) -> Result<(), StoreError>;
}
