pub mod import;
pub mod store;
